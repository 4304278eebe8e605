//! RSVP form data and validation.
//!
//! Validation never throws; it reports per-field messages the frontend
//! renders next to the offending inputs. Submission itself is simulated by
//! the frontend with a fixed delay and no retry.

use thiserror::Error;

use crate::constants::RSVP_MAX_GUESTS;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Attendance {
    Attending,
    Declining,
}

impl Attendance {
    /// Parse the form control's value attribute.
    pub fn from_value(value: &str) -> Option<Self> {
        match value {
            "attending" => Some(Self::Attending),
            "declining" => Some(Self::Declining),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum FieldError {
    #[error("Please enter your name")]
    MissingName,
    #[error("Please select your attendance")]
    MissingAttendance,
    #[error("Guest count must be between 1 and 5")]
    GuestCountOutOfRange,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub full_name: Option<FieldError>,
    pub attendance: Option<FieldError>,
    pub guest_count: Option<FieldError>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.full_name.is_none() && self.attendance.is_none() && self.guest_count.is_none()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RsvpForm {
    pub full_name: String,
    pub email: String,
    pub attendance: Option<Attendance>,
    pub guest_count: u8,
    pub message: String,
}

impl Default for RsvpForm {
    fn default() -> Self {
        Self {
            full_name: String::new(),
            email: String::new(),
            attendance: None,
            guest_count: 1,
            message: String::new(),
        }
    }
}

impl RsvpForm {
    /// Field-level validation. Name and attendance are required; the guest
    /// count only matters when attending. Email and message are optional.
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::default();
        if self.full_name.trim().is_empty() {
            errors.full_name = Some(FieldError::MissingName);
        }
        match self.attendance {
            None => errors.attendance = Some(FieldError::MissingAttendance),
            Some(Attendance::Attending) => {
                if self.guest_count < 1 || self.guest_count > RSVP_MAX_GUESTS {
                    errors.guest_count = Some(FieldError::GuestCountOutOfRange);
                }
            }
            Some(Attendance::Declining) => {}
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
