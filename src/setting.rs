//! Composable plot options.
//!
//! A [`Setting`] mutates exactly one field of a [`PlotSettings`]. It never
//! reads other fields and never fails: out-of-range input is coerced, not
//! rejected.

use crate::settings::PlotSettings;

/// A single change to a settings record
pub trait Setting {
    fn apply(&self, settings: &mut PlotSettings);
}

/// The built-in options, one per settings field
#[derive(Debug, Clone, PartialEq)]
pub enum PlotOption {
    Width(i64),
    Height(i64),
    Lower(f64),
    Upper(f64),
    Offset(i64),
    Caption(String),
}

impl PlotOption {
    /// Name of the field this option writes
    pub fn field(&self) -> &'static str {
        match self {
            PlotOption::Width(_) => "width",
            PlotOption::Height(_) => "height",
            PlotOption::Lower(_) => "lower",
            PlotOption::Upper(_) => "upper",
            PlotOption::Offset(_) => "offset",
            PlotOption::Caption(_) => "caption",
        }
    }
}

impl Setting for PlotOption {
    fn apply(&self, settings: &mut PlotSettings) {
        match self {
            PlotOption::Width(w) => settings.width = clamp_dimension(*w),
            PlotOption::Height(h) => settings.height = clamp_dimension(*h),
            PlotOption::Lower(v) => settings.lower = *v,
            PlotOption::Upper(v) => settings.upper = *v,
            PlotOption::Offset(o) => settings.offset = *o,
            PlotOption::Caption(s) => settings.caption = s.trim().to_string(),
        }
    }
}

/// Non-positive sizes collapse to the 0 "auto" sentinel
fn clamp_dimension(value: i64) -> usize {
    if value > 0 {
        usize::try_from(value).unwrap_or(usize::MAX)
    } else {
        0
    }
}

/// Plot width in columns. Values <= 0 reset to auto.
pub fn width(w: i64) -> PlotOption {
    PlotOption::Width(w)
}

/// Plot height in rows. Values <= 0 reset to auto.
pub fn height(h: i64) -> PlotOption {
    PlotOption::Height(h)
}

pub fn lower(v: f64) -> PlotOption {
    PlotOption::Lower(v)
}

pub fn upper(v: f64) -> PlotOption {
    PlotOption::Upper(v)
}

/// Left padding in columns; negative values pass through.
pub fn offset(o: i64) -> PlotOption {
    PlotOption::Offset(o)
}

/// Caption text, trimmed of surrounding whitespace when applied.
pub fn caption(s: impl Into<String>) -> PlotOption {
    PlotOption::Caption(s.into())
}

/// Setting backed by a closure
pub struct SettingFn<F>(F);

/// Wrap a closure as a [`Setting`]
pub fn from_fn<F>(f: F) -> SettingFn<F>
where
    F: Fn(&mut PlotSettings),
{
    SettingFn(f)
}

impl<F> Setting for SettingFn<F>
where
    F: Fn(&mut PlotSettings),
{
    fn apply(&self, settings: &mut PlotSettings) {
        (self.0)(settings)
    }
}

impl<S: Setting + ?Sized> Setting for &S {
    fn apply(&self, settings: &mut PlotSettings) {
        (**self).apply(settings)
    }
}

impl<S: Setting + ?Sized> Setting for Box<S> {
    fn apply(&self, settings: &mut PlotSettings) {
        (**self).apply(settings)
    }
}

impl<S: Setting> Setting for Option<S> {
    fn apply(&self, settings: &mut PlotSettings) {
        if let Some(setting) = self {
            setting.apply(settings);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn applied(option: PlotOption) -> PlotSettings {
        let mut settings = PlotSettings::default();
        option.apply(&mut settings);
        settings
    }

    #[test]
    fn test_width_clamps_non_positive() {
        assert_eq!(applied(width(0)).width, 0);
        assert_eq!(applied(width(-1)).width, 0);
        assert_eq!(applied(width(i64::MIN)).width, 0);
        assert_eq!(applied(width(1)).width, 1);
        assert_eq!(applied(width(80)).width, 80);
    }

    #[test]
    fn test_height_clamps_non_positive() {
        assert_eq!(applied(height(-20)).height, 0);
        assert_eq!(applied(height(0)).height, 0);
        assert_eq!(applied(height(12)).height, 12);
    }

    #[test]
    fn test_negative_width_resets_explicit_value() {
        let mut settings = PlotSettings::default();
        width(30).apply(&mut settings);
        width(-5).apply(&mut settings);
        assert_eq!(settings.width, 0);
    }

    #[test]
    fn test_bounds_and_offset_pass_through() {
        assert_eq!(applied(lower(-3.25)).lower, -3.25);
        assert_eq!(applied(upper(1e9)).upper, 1e9);
        assert_eq!(applied(offset(-7)).offset, -7);
        assert_eq!(applied(offset(3)).offset, 3);
    }

    #[test]
    fn test_caption_is_trimmed() {
        assert_eq!(applied(caption("  hi  ")).caption, "hi");
        assert_eq!(applied(caption("hi")).caption, "hi");
        assert_eq!(applied(caption("\tcpu load\n")).caption, "cpu load");
        assert_eq!(applied(caption("   ")).caption, "");
    }

    #[test]
    fn test_option_touches_only_its_field() {
        let populated = PlotSettings {
            width: 10,
            height: 5,
            lower: 1.0,
            upper: 2.0,
            offset: 4,
            caption: "keep".to_string(),
        };
        let cases = vec![
            (width(30), PlotSettings { width: 30, ..populated.clone() }),
            (height(-1), PlotSettings { height: 0, ..populated.clone() }),
            (lower(-8.0), PlotSettings { lower: -8.0, ..populated.clone() }),
            (upper(9.0), PlotSettings { upper: 9.0, ..populated.clone() }),
            (offset(-6), PlotSettings { offset: -6, ..populated.clone() }),
            (caption(" new "), PlotSettings { caption: "new".to_string(), ..populated.clone() }),
        ];

        for (option, expected) in cases {
            let mut settings = populated.clone();
            option.apply(&mut settings);
            assert_eq!(settings, expected, "{} changed another field", option.field());
        }
    }

    #[test]
    fn test_field_names() {
        assert_eq!(width(1).field(), "width");
        assert_eq!(caption("x").field(), "caption");
        assert_eq!(offset(0).field(), "offset");
    }

    #[test]
    fn test_closure_and_wrappers() {
        let mut settings = PlotSettings::default();
        from_fn(|s: &mut PlotSettings| s.offset = 2).apply(&mut settings);
        assert_eq!(settings.offset, 2);

        let boxed: Box<dyn Setting> = Box::new(height(4));
        boxed.apply(&mut settings);
        assert_eq!(settings.height, 4);

        let none: Option<PlotOption> = None;
        none.apply(&mut settings);
        Some(width(6)).apply(&mut settings);
        assert_eq!(settings.width, 6);
        assert_eq!(settings.height, 4);
    }
}
