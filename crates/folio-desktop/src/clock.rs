//! Taskbar and detail-view clock labels

/// How often the clock labels are refreshed
pub const CLOCK_INTERVAL_MS: u32 = 1000;

/// Local wall-clock time, as read from the host
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClockReading {
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
}

impl ClockReading {
    pub const fn new(hours: u32, minutes: u32, seconds: u32) -> Self {
        Self {
            hours,
            minutes,
            seconds,
        }
    }

    /// `HH:MM`
    pub fn taskbar_label(&self) -> String {
        format!("{:02}:{:02}", self.hours, self.minutes)
    }

    /// `HH:MM:SS`
    pub fn detail_label(&self) -> String {
        format!("{:02}:{:02}:{:02}", self.hours, self.minutes, self.seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_are_zero_padded() {
        let t = ClockReading::new(7, 5, 9);
        assert_eq!(t.taskbar_label(), "07:05");
        assert_eq!(t.detail_label(), "07:05:09");
    }

    #[test]
    fn test_labels_late_evening() {
        let t = ClockReading::new(23, 59, 59);
        assert_eq!(t.taskbar_label(), "23:59");
        assert_eq!(t.detail_label(), "23:59:59");
    }
}
