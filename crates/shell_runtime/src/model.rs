pub const DEFAULT_WINDOW_WIDTH: i32 = 800;
pub const DEFAULT_WINDOW_HEIGHT: i32 = 500;
pub const CASCADE_ORIGIN_PX: i32 = 60;
pub const CASCADE_STEP_PX: i32 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WindowId(pub u64);

/// Every application the shell can host. The compiler rejects catalog gaps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AppId {
    Browser,
    Assistant,
    Files,
    Wallpaper,
    Settings,
    Store,
    Terminal,
    Calculator,
    Camera,
    Notes,
    Gallery,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowRect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl WindowRect {
    pub fn at(x: i32, y: i32) -> Self {
        Self { x, y, ..Self::default() }
    }
}

impl Default for WindowRect {
    fn default() -> Self {
        Self {
            x: CASCADE_ORIGIN_PX,
            y: CASCADE_ORIGIN_PX,
            w: DEFAULT_WINDOW_WIDTH,
            h: DEFAULT_WINDOW_HEIGHT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowRecord {
    pub id: WindowId,
    pub app_id: AppId,
    pub title: String,
    pub rect: WindowRect,
    pub z_index: u32,
    pub minimized: bool,
    pub maximized: bool,
}

/// Wall-clock snapshot the shelf and lock screen render from.
///
/// Captured via `js_sys::Date` on WASM; the non-WASM fallback pins the epoch so
/// reducer tests stay deterministic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockSnapshot {
    pub year: u32,
    pub month: u32,
    pub day: u32,
    /// Day of week, Sunday = 0.
    pub weekday: u32,
    pub hour: u32,
    pub minute: u32,
}

impl ClockSnapshot {
    pub fn now() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            let date = js_sys::Date::new_0();
            return Self {
                year: date.get_full_year(),
                month: date.get_month() + 1,
                day: date.get_date(),
                weekday: date.get_day(),
                hour: date.get_hours(),
                minute: date.get_minutes(),
            };
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            Self::default()
        }
    }

    pub fn format_time(&self) -> String {
        format!("{:02}:{:02}", self.hour, self.minute)
    }

    /// Short form for the shelf status pill, e.g. "Thu, Jan 1".
    pub fn format_date(&self) -> String {
        format!(
            "{}, {} {}",
            weekday_short(self.weekday),
            month_short(self.month),
            self.day
        )
    }

    /// Long form for the lock screen, e.g. "Thursday, January 1".
    pub fn format_long_date(&self) -> String {
        format!(
            "{}, {} {}",
            weekday_long(self.weekday),
            month_long(self.month),
            self.day
        )
    }
}

impl Default for ClockSnapshot {
    fn default() -> Self {
        Self {
            year: 1970,
            month: 1,
            day: 1,
            weekday: 4,
            hour: 0,
            minute: 0,
        }
    }
}

fn weekday_short(weekday: u32) -> &'static str {
    ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"]
        .get(weekday as usize)
        .copied()
        .unwrap_or("Sun")
}

fn weekday_long(weekday: u32) -> &'static str {
    [
        "Sunday",
        "Monday",
        "Tuesday",
        "Wednesday",
        "Thursday",
        "Friday",
        "Saturday",
    ]
    .get(weekday as usize)
    .copied()
    .unwrap_or("Sunday")
}

fn month_short(month: u32) -> &'static str {
    [
        "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
    ]
    .get(month.saturating_sub(1) as usize)
    .copied()
    .unwrap_or("Jan")
}

fn month_long(month: u32) -> &'static str {
    [
        "January",
        "February",
        "March",
        "April",
        "May",
        "June",
        "July",
        "August",
        "September",
        "October",
        "November",
        "December",
    ]
    .get(month.saturating_sub(1) as usize)
    .copied()
    .unwrap_or("January")
}

/// Single source of truth for the whole shell session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellState {
    pub next_window_id: u64,
    /// Insertion order is creation order; stacking comes from `z_index`.
    pub windows: Vec<WindowRecord>,
    pub active_window: Option<WindowId>,
    pub wallpaper: String,
    pub launcher_open: bool,
    pub quick_settings_open: bool,
    pub locked: bool,
    pub tablet_mode: bool,
    pub clock: ClockSnapshot,
    pub pinned: Vec<AppId>,
}

impl Default for ShellState {
    fn default() -> Self {
        Self {
            next_window_id: 1,
            windows: Vec::new(),
            active_window: None,
            wallpaper: crate::apps::default_wallpaper().to_string(),
            launcher_open: false,
            quick_settings_open: false,
            locked: true,
            tablet_mode: false,
            clock: ClockSnapshot::default(),
            pinned: crate::apps::default_pinned_apps(),
        }
    }
}

impl ShellState {
    pub fn max_z(&self) -> u32 {
        self.windows.iter().map(|w| w.z_index).max().unwrap_or(0)
    }

    pub fn window(&self, window_id: WindowId) -> Option<&WindowRecord> {
        self.windows.iter().find(|w| w.id == window_id)
    }

    pub fn has_visible_window(&self) -> bool {
        self.windows.iter().any(|w| !w.minimized)
    }

    pub fn is_app_open(&self, app_id: AppId) -> bool {
        self.windows.iter().any(|w| w.app_id == app_id)
    }

    pub fn active_app(&self) -> Option<AppId> {
        self.active_window
            .and_then(|id| self.window(id))
            .map(|w| w.app_id)
    }

    /// Windows the host should mount. Tablet mode shows only the active window
    /// fullscreen; desktop mode shows every non-minimized window in place.
    pub fn display_windows(&self) -> Vec<WindowRecord> {
        if self.tablet_mode {
            return self
                .active_window
                .and_then(|id| self.window(id))
                .filter(|w| !w.minimized)
                .cloned()
                .into_iter()
                .collect();
        }

        self.windows
            .iter()
            .filter(|w| !w.minimized)
            .cloned()
            .collect()
    }
}
