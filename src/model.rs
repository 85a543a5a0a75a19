//! Application state for the clock widget.
//! The original design kept theme and format flags as module-level mutables;
//! here they live in a single reducer-held value so every update goes
//! through one explicit action path.

use serde::{Deserialize, Serialize};
use std::rc::Rc;
use yew::Reducible;

use crate::clock::{self, CalendarDate, HandAngles, TimeSample};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DisplayFormat {
    TwelveHour,
    TwentyFourHour,
}

impl DisplayFormat {
    pub fn toggled(self) -> Self {
        match self {
            Self::TwelveHour => Self::TwentyFourHour,
            Self::TwentyFourHour => Self::TwelveHour,
        }
    }

    /// Toggle-button label: names the mode the button switches *to*.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Self::TwentyFourHour => "12H",
            Self::TwelveHour => "24H",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ThemeState {
    Light,
    Dark,
}

impl ThemeState {
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Value of the container's `data-theme` attribute.
    pub fn attr(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Icon glyph: sun while dark, moon while light.
    pub fn icon(self) -> &'static str {
        match self {
            Self::Dark => "\u{2600}\u{fe0f}",
            Self::Light => "\u{1f319}",
        }
    }
}

/// Which refresh driver is live. Recorded as state rather than inferred
/// from control flow, so a failed smooth startup is observable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RefreshMode {
    /// 1s full refresh only.
    Basic,
    /// 1s text/hour/minute refresh plus a 50ms second-hand sweep.
    Smooth,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClockState {
    pub format: DisplayFormat,
    pub theme: ThemeState,
    pub mode: RefreshMode,
    pub sample: TimeSample,
    pub date: CalendarDate,
    pub angles: HandAngles,
}

impl ClockState {
    pub fn initial(sample: TimeSample, date: CalendarDate) -> Self {
        Self {
            format: DisplayFormat::TwentyFourHour,
            theme: ThemeState::Light,
            mode: RefreshMode::Basic,
            angles: clock::compute_angles(&sample),
            sample,
            date,
        }
    }
}

#[derive(Clone, Debug)]
pub enum ClockAction {
    /// Base-cadence refresh: digital text, date, and hand angles.
    Tick { sample: TimeSample, date: CalendarDate },
    /// Sweep-cadence refresh: second hand only.
    Sweep { sample: TimeSample },
    ToggleTheme,
    ToggleFormat,
    SetMode(RefreshMode),
}

impl Reducible for ClockState {
    type Action = ClockAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        use ClockAction::*;
        let mut new = (*self).clone();
        match action {
            Tick { sample, date } => {
                let angles = clock::compute_angles(&sample);
                new.angles = match new.mode {
                    // The sweep interval owns the second hand while smooth
                    // mode is live; the base tick must not snap it back.
                    RefreshMode::Smooth => HandAngles {
                        second_deg: new.angles.second_deg,
                        ..angles
                    },
                    RefreshMode::Basic => angles,
                };
                new.sample = sample;
                new.date = date;
            }
            Sweep { sample } => {
                new.angles.second_deg = clock::sweep_second_deg(&sample);
            }
            ToggleTheme => {
                new.theme = new.theme.toggled();
            }
            ToggleFormat => {
                new.format = new.format.toggled();
            }
            SetMode(mode) => {
                new.mode = mode;
            }
        }
        Rc::new(new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::format_digital;

    fn sample(hour: u32, minute: u32, second: u32, millisecond: u32) -> TimeSample {
        TimeSample {
            hour,
            minute,
            second,
            millisecond,
        }
    }

    fn state() -> ClockState {
        ClockState::initial(
            sample(6, 30, 0, 0),
            CalendarDate {
                weekday: 5,
                day: 29,
                month: 7,
                year: 2026,
            },
        )
    }

    fn reduce(state: ClockState, action: ClockAction) -> ClockState {
        (*Rc::new(state).reduce(action)).clone()
    }

    #[test]
    fn double_format_toggle_restores_identical_output() {
        let start = state();
        let before = format_digital(&start.sample, start.format);
        let once = reduce(start.clone(), ClockAction::ToggleFormat);
        assert_ne!(once.format, start.format);
        assert_ne!(format_digital(&once.sample, once.format), before);
        let twice = reduce(once, ClockAction::ToggleFormat);
        assert_eq!(twice.format, start.format);
        assert_eq!(format_digital(&twice.sample, twice.format), before);
    }

    #[test]
    fn double_theme_toggle_restores_attr_and_icon() {
        let start = state();
        let once = reduce(start.clone(), ClockAction::ToggleTheme);
        assert_ne!(once.theme.attr(), start.theme.attr());
        assert_ne!(once.theme.icon(), start.theme.icon());
        let twice = reduce(once, ClockAction::ToggleTheme);
        assert_eq!(twice.theme, start.theme);
        assert_eq!(twice.theme.attr(), start.theme.attr());
        assert_eq!(twice.theme.icon(), start.theme.icon());
    }

    #[test]
    fn toggle_labels_name_the_other_mode() {
        assert_eq!(DisplayFormat::TwentyFourHour.toggle_label(), "12H");
        assert_eq!(DisplayFormat::TwelveHour.toggle_label(), "24H");
    }

    #[test]
    fn icon_shows_the_sun_in_the_dark() {
        assert_eq!(ThemeState::Dark.icon(), "\u{2600}\u{fe0f}");
        assert_eq!(ThemeState::Light.icon(), "\u{1f319}");
    }

    #[test]
    fn basic_tick_recomputes_every_hand() {
        let s = reduce(
            state(),
            ClockAction::Tick {
                sample: sample(3, 0, 30, 0),
                date: state().date,
            },
        );
        assert_eq!(s.angles.hour_deg, 90.0);
        assert_eq!(s.angles.minute_deg, 3.0);
        assert_eq!(s.angles.second_deg, 180.0);
        assert_eq!(s.sample, sample(3, 0, 30, 0));
    }

    #[test]
    fn smooth_tick_leaves_the_second_hand_to_the_sweep() {
        let s = reduce(state(), ClockAction::SetMode(RefreshMode::Smooth));
        let s = reduce(
            s,
            ClockAction::Sweep {
                sample: sample(6, 30, 30, 500),
            },
        );
        assert_eq!(s.angles.second_deg, 183.0);

        // Base tick refreshes hour/minute and the text sample, not seconds.
        let s = reduce(
            s.clone(),
            ClockAction::Tick {
                sample: sample(6, 31, 0, 0),
                date: s.date,
            },
        );
        assert_eq!(s.angles.second_deg, 183.0);
        assert_eq!(s.angles.minute_deg, 186.0);
        assert_eq!(s.sample.minute, 31);
    }

    #[test]
    fn sweep_touches_only_the_second_hand() {
        let start = state();
        let s = reduce(
            start.clone(),
            ClockAction::Sweep {
                sample: sample(6, 30, 15, 250),
            },
        );
        assert_eq!(s.angles.second_deg, 91.5);
        assert_eq!(s.angles.hour_deg, start.angles.hour_deg);
        assert_eq!(s.angles.minute_deg, start.angles.minute_deg);
        assert_eq!(s.sample, start.sample);
    }

    #[test]
    fn ticks_keep_updating_after_a_fallback() {
        let s = reduce(state(), ClockAction::SetMode(RefreshMode::Basic));
        let s = reduce(
            s.clone(),
            ClockAction::Tick {
                sample: sample(6, 30, 1, 0),
                date: s.date,
            },
        );
        let first = format_digital(&s.sample, s.format).0;
        let s = reduce(
            s.clone(),
            ClockAction::Tick {
                sample: sample(6, 30, 2, 0),
                date: s.date,
            },
        );
        let second = format_digital(&s.sample, s.format).0;
        assert_eq!(first, "06:30:01");
        assert_eq!(second, "06:30:02");
    }
}
