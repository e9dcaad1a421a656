//! Non-fatal notices raised while rasterizing

use std::fmt;
use std::mem;

use parking_lot::Mutex;

/// Something worth telling the caller about that doesn't change the result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// A curve was rasterized as the polygon through its control points.
    CurveApproximated { control_points: usize },
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Notice::CurveApproximated { control_points } => {
                write!(f, "Curve rasterized as the polygon through its {} control points, not as a true curve", control_points)
            }
        }
    }
}

/// Receives notices from rasterization.
///
/// Implementations must be thread-safe, since batch rasterization shares one sink between workers.
pub trait Diagnostics: Send + Sync {
    fn notice(&self, notice: Notice);
}

impl<'a, D: ?Sized> Diagnostics for &'a D where D: Diagnostics {
    #[inline]
    fn notice(&self, notice: Notice) {
        (**self).notice(notice)
    }
}

/// Forwards notices to the `log` facade as warnings.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogDiagnostics;

impl Diagnostics for LogDiagnostics {
    fn notice(&self, notice: Notice) {
        warn!("{}", notice);
    }
}

/// Drops every notice
#[derive(Debug, Default, Clone, Copy)]
pub struct NullDiagnostics;

impl Diagnostics for NullDiagnostics {
    #[inline]
    fn notice(&self, _: Notice) {}
}

/// Keeps every notice in order of arrival.
#[derive(Debug, Default)]
pub struct RecordingDiagnostics {
    notices: Mutex<Vec<Notice>>,
}

impl RecordingDiagnostics {
    pub fn new() -> RecordingDiagnostics {
        RecordingDiagnostics::default()
    }

    /// Copy of all notices recorded so far
    pub fn notices(&self) -> Vec<Notice> {
        self.notices.lock().clone()
    }

    /// Removes and returns all notices recorded so far
    pub fn take(&self) -> Vec<Notice> {
        mem::replace(&mut *self.notices.lock(), Vec::new())
    }

    pub fn len(&self) -> usize {
        self.notices.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Diagnostics for RecordingDiagnostics {
    fn notice(&self, notice: Notice) {
        self.notices.lock().push(notice);
    }
}
