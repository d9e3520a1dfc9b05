/// A state record that accepts shallow partial updates.
///
/// `Patch` is the companion type with every declared field made optional.
/// A field present in the patch replaces the corresponding state field
/// wholesale (nested values are never deep-merged); a field absent from the
/// patch is carried over unchanged.
///
/// Merging an all-empty patch yields a state equal to the prior one. The
/// trait does not detect no-op patches; callers that merge one still get a
/// merge.
///
/// # Example
///
/// ```
/// use tinstore::Merge;
///
/// #[derive(Clone, Debug, PartialEq)]
/// struct Settings {
///     volume: u8,
///     theme: String,
/// }
///
/// #[derive(Default)]
/// struct SettingsPatch {
///     volume: Option<u8>,
///     theme: Option<String>,
/// }
///
/// impl Merge for Settings {
///     type Patch = SettingsPatch;
///
///     fn merge(&mut self, patch: SettingsPatch) {
///         if let Some(volume) = patch.volume {
///             self.volume = volume;
///         }
///         if let Some(theme) = patch.theme {
///             self.theme = theme;
///         }
///     }
/// }
///
/// let mut settings = Settings { volume: 5, theme: "dark".to_string() };
/// settings.merge(SettingsPatch { volume: Some(7), ..Default::default() });
/// assert_eq!(settings.volume, 7);
/// assert_eq!(settings.theme, "dark");
/// ```
pub trait Merge: Clone {
    /// The partial-update type: every declared field optional.
    type Patch;

    /// Merge `patch` into `self`, field by field.
    fn merge(&mut self, patch: Self::Patch);
}
