use crate::setting::Setting;
use crate::settings::PlotSettings;
use log::trace;

/// Fold `settings` over `defaults` in the order given.
///
/// Later settings override earlier ones touching the same field. Composition
/// cannot fail; the returned record does not alias `defaults`.
pub fn compose<I>(defaults: PlotSettings, settings: I) -> PlotSettings
where
    I: IntoIterator,
    I::Item: Setting,
{
    let mut applied = 0usize;
    let resolved = settings.into_iter().fold(defaults, |mut acc, setting| {
        setting.apply(&mut acc);
        applied += 1;
        trace!("applied setting #{}", applied);
        acc
    });
    trace!("composed {} setting(s) into {:?}", applied, resolved);
    resolved
}

/// Compose against the built-in defaults
pub fn configure<I>(settings: I) -> PlotSettings
where
    I: IntoIterator,
    I::Item: Setting,
{
    compose(PlotSettings::default(), settings)
}
