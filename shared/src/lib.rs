use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// The one status color that marks a day as fully booked. Cells carrying
/// exactly this color are additionally rendered with `BOOKED_TEXT_COLOR`;
/// any other status keeps the default text color.
pub const BOOKED_STATUS_COLOR: &str = "#f8d7da";

/// Text color applied to booked day cells.
pub const BOOKED_TEXT_COLOR: &str = "#721c24";

/// Every week row holds exactly this many slots, Sunday first.
pub const SLOTS_PER_WEEK: usize = 7;

/// Everything the host page embeds for the frontend: carousel image URLs,
/// the hall list (which fixes the selector's option order) and the
/// pre-computed availability calendars.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SitePayload {
    pub carousel: Vec<String>,
    pub halls: Vec<HallSummary>,
    pub availability: AvailabilityCalendarSet,
}

impl SitePayload {
    /// Parse and validate an embedded payload in one step. This is the only
    /// entry point for raw data; past it, every week is guaranteed to be
    /// seven slots wide with months and day labels in range.
    pub fn from_json(raw: &str) -> Result<Self, PayloadError> {
        let payload: SitePayload =
            serde_json::from_str(raw).map_err(|e| PayloadError::Parse(e.to_string()))?;
        payload.availability.validate()?;
        Ok(payload)
    }
}

/// A bookable hall as listed in the selector controls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HallSummary {
    pub id: String,
    pub name: String,
}

/// Pre-computed availability calendars keyed by hall id, each hall's months
/// in chronological order. Read-only input: the frontend only projects
/// slices of it and never writes back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AvailabilityCalendarSet(HashMap<String, Vec<MonthCalendar>>);

impl AvailabilityCalendarSet {
    pub fn new(calendars: HashMap<String, Vec<MonthCalendar>>) -> Self {
        Self(calendars)
    }

    /// Look up one month of one hall. `None` covers both failure modes of
    /// the render path: unknown hall and out-of-range month index.
    pub fn month(&self, hall: &str, month_index: usize) -> Option<&MonthCalendar> {
        self.0.get(hall)?.get(month_index)
    }

    /// Number of months available for a hall; 0 for unknown halls.
    pub fn month_count(&self, hall: &str) -> usize {
        self.0.get(hall).map(Vec::len).unwrap_or(0)
    }

    fn validate(&self) -> Result<(), PayloadError> {
        for (hall, months) in &self.0 {
            for (month_index, month) in months.iter().enumerate() {
                if !(1..=12).contains(&month.month) {
                    return Err(PayloadError::MonthOutOfRange {
                        hall: hall.clone(),
                        month_index,
                        month: month.month,
                    });
                }
                for (week_index, week) in month.weeks.iter().enumerate() {
                    if week.len() != SLOTS_PER_WEEK {
                        return Err(PayloadError::MalformedWeek {
                            hall: hall.clone(),
                            month_index,
                            week_index,
                            len: week.len(),
                        });
                    }
                    for slot in week.iter().flatten() {
                        if !(1..=31).contains(&slot.day) {
                            return Err(PayloadError::DayOutOfRange {
                                hall: hall.clone(),
                                month_index,
                                day: slot.day,
                            });
                        }
                    }
                }
            }
        }
        Ok(())
    }
}

/// One month of availability for one hall, weeks ordered top to bottom.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthCalendar {
    pub year: i32,
    /// 1-12, zero-padded to two digits in the header label.
    pub month: u32,
    pub weeks: Vec<Week>,
}

/// A week row: seven slots, Sunday first. `None` marks a slot belonging to
/// an adjacent month, rendered blank.
pub type Week = Vec<Option<DayCell>>;

impl MonthCalendar {
    /// Header label, e.g. "2024-11".
    pub fn label(&self) -> String {
        format!("{}-{:02}", self.year, self.month)
    }
}

/// One populated day in the grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayCell {
    pub day: u32,
    /// Background color for the cell; equality with `BOOKED_STATUS_COLOR`
    /// is the booked flag.
    pub status: String,
}

impl DayCell {
    pub fn is_booked(&self) -> bool {
        self.status == BOOKED_STATUS_COLOR
    }

    /// Inline style for the rendered cell. Booked cells switch their text
    /// color on top of the status background.
    pub fn inline_style(&self) -> String {
        if self.is_booked() {
            format!("background-color: {};color: {};", self.status, BOOKED_TEXT_COLOR)
        } else {
            format!("background-color: {};", self.status)
        }
    }
}

/// Where the calendar view is looking: which hall and which offset into
/// that hall's month sequence. Owned by the view; event handlers derive the
/// next cursor through the operations below and persist it between events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarCursor {
    pub hall: String,
    pub month_index: usize,
}

impl CalendarCursor {
    pub fn new(hall: impl Into<String>) -> Self {
        Self {
            hall: hall.into(),
            month_index: 0,
        }
    }

    /// Switching halls always starts over at the first month.
    pub fn select_hall(&self, hall: impl Into<String>) -> Self {
        Self::new(hall)
    }

    /// One month back, or `None` when already at the first month. The
    /// boundary is a clamp, not an error.
    pub fn prev(&self) -> Option<Self> {
        (self.month_index > 0).then(|| Self {
            hall: self.hall.clone(),
            month_index: self.month_index - 1,
        })
    }

    /// One month forward while staying inside `month_count`, or `None` when
    /// already at the last month.
    pub fn next(&self, month_count: usize) -> Option<Self> {
        (self.month_index + 1 < month_count).then(|| Self {
            hall: self.hall.clone(),
            month_index: self.month_index + 1,
        })
    }
}

/// Everything that can be wrong with an embedded payload. Raised once, at
/// the validation boundary; the render path never sees malformed data.
#[derive(Debug, Clone, PartialEq)]
pub enum PayloadError {
    Parse(String),
    MonthOutOfRange {
        hall: String,
        month_index: usize,
        month: u32,
    },
    MalformedWeek {
        hall: String,
        month_index: usize,
        week_index: usize,
        len: usize,
    },
    DayOutOfRange {
        hall: String,
        month_index: usize,
        day: u32,
    },
}

impl fmt::Display for PayloadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PayloadError::Parse(message) => {
                write!(f, "payload is not valid JSON: {}", message)
            }
            PayloadError::MonthOutOfRange {
                hall,
                month_index,
                month,
            } => write!(
                f,
                "hall '{}' month index {}: month {} is out of range",
                hall, month_index, month
            ),
            PayloadError::MalformedWeek {
                hall,
                month_index,
                week_index,
                len,
            } => write!(
                f,
                "hall '{}' month index {}: week {} has {} slots, expected {}",
                hall, month_index, week_index, len, SLOTS_PER_WEEK
            ),
            PayloadError::DayOutOfRange {
                hall,
                month_index,
                day,
            } => write!(
                f,
                "hall '{}' month index {}: day {} is out of range",
                hall, month_index, day
            ),
        }
    }
}

impl std::error::Error for PayloadError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(day: u32, status: &str) -> Option<DayCell> {
        Some(DayCell {
            day,
            status: status.to_string(),
        })
    }

    fn blank_week() -> Week {
        vec![None; SLOTS_PER_WEEK]
    }

    fn sample_set() -> AvailabilityCalendarSet {
        let mut calendars = HashMap::new();
        calendars.insert(
            "grand".to_string(),
            vec![
                MonthCalendar {
                    year: 2024,
                    month: 11,
                    weeks: vec![blank_week()],
                },
                MonthCalendar {
                    year: 2024,
                    month: 12,
                    weeks: vec![blank_week()],
                },
            ],
        );
        AvailabilityCalendarSet::new(calendars)
    }

    #[test]
    fn test_month_lookup() {
        let set = sample_set();

        assert_eq!(set.month("grand", 0).unwrap().month, 11);
        assert_eq!(set.month("grand", 1).unwrap().month, 12);

        // Unknown hall and out-of-range index are the same non-fatal miss.
        assert!(set.month("grand", 2).is_none());
        assert!(set.month("ballroom", 0).is_none());
    }

    #[test]
    fn test_month_count() {
        let set = sample_set();
        assert_eq!(set.month_count("grand"), 2);
        assert_eq!(set.month_count("ballroom"), 0);
    }

    #[test]
    fn test_month_label_zero_pads() {
        let november = MonthCalendar {
            year: 2024,
            month: 11,
            weeks: Vec::new(),
        };
        let february = MonthCalendar {
            year: 2025,
            month: 2,
            weeks: Vec::new(),
        };
        assert_eq!(november.label(), "2024-11");
        assert_eq!(february.label(), "2025-02");
    }

    #[test]
    fn test_cursor_select_hall_resets_index() {
        let cursor = CalendarCursor {
            hall: "grand".to_string(),
            month_index: 5,
        };
        let switched = cursor.select_hall("garden");
        assert_eq!(switched.hall, "garden");
        assert_eq!(switched.month_index, 0);
    }

    #[test]
    fn test_cursor_prev_clamps_at_first_month() {
        let cursor = CalendarCursor::new("grand");
        assert_eq!(cursor.prev(), None);

        let ahead = CalendarCursor {
            hall: "grand".to_string(),
            month_index: 2,
        };
        assert_eq!(ahead.prev().unwrap().month_index, 1);
    }

    #[test]
    fn test_cursor_next_clamps_at_last_month() {
        let cursor = CalendarCursor::new("grand");
        assert_eq!(cursor.next(1), None);
        assert_eq!(cursor.next(0), None);
        assert_eq!(cursor.next(2).unwrap().month_index, 1);
    }

    #[test]
    fn test_cursor_walk_matches_labels() {
        // Hall with [2024-11, 2024-12]: one step forward lands on 2024-12,
        // a second step is a no-op, one step back returns to 2024-11.
        let set = sample_set();
        let cursor = CalendarCursor::new("grand");
        assert_eq!(
            set.month(&cursor.hall, cursor.month_index).unwrap().label(),
            "2024-11"
        );

        let cursor = cursor.next(set.month_count(&cursor.hall)).unwrap();
        assert_eq!(
            set.month(&cursor.hall, cursor.month_index).unwrap().label(),
            "2024-12"
        );

        assert_eq!(cursor.next(set.month_count(&cursor.hall)), None);
        assert_eq!(cursor.prev().unwrap().month_index, 0);
    }

    #[test]
    fn test_booked_cell_style() {
        let booked = DayCell {
            day: 15,
            status: BOOKED_STATUS_COLOR.to_string(),
        };
        assert!(booked.is_booked());
        assert_eq!(
            booked.inline_style(),
            "background-color: #f8d7da;color: #721c24;"
        );
    }

    #[test]
    fn test_free_cell_style() {
        let free = DayCell {
            day: 15,
            status: "#d4edda".to_string(),
        };
        assert!(!free.is_booked());
        assert_eq!(free.inline_style(), "background-color: #d4edda;");
    }

    #[test]
    fn test_payload_from_json() {
        let raw = r##"{
            "carousel": ["/static/a.jpg", "/static/b.jpg"],
            "halls": [
                {"id": "grand", "name": "Grand Hall"},
                {"id": "garden", "name": "Garden Pavilion"}
            ],
            "availability": {
                "grand": [
                    {"year": 2024, "month": 11, "weeks": [
                        [null, null, null, null, null,
                         {"day": 1, "status": "#d4edda"},
                         {"day": 2, "status": "#f8d7da"}]
                    ]}
                ]
            }
        }"##;

        let payload = SitePayload::from_json(raw).unwrap();
        assert_eq!(payload.carousel.len(), 2);
        // Option order follows the halls array, not the map.
        assert_eq!(payload.halls[0].id, "grand");
        assert_eq!(payload.halls[1].id, "garden");

        let month = payload.availability.month("grand", 0).unwrap();
        assert_eq!(month.label(), "2024-11");
        assert_eq!(month.weeks[0].len(), SLOTS_PER_WEEK);
        assert!(month.weeks[0][0].is_none());
        assert!(month.weeks[0][5].is_some());
        assert!(month.weeks[0][6].as_ref().unwrap().is_booked());
    }

    #[test]
    fn test_payload_rejects_short_week() {
        let mut calendars = HashMap::new();
        calendars.insert(
            "grand".to_string(),
            vec![MonthCalendar {
                year: 2024,
                month: 11,
                weeks: vec![vec![None, cell(1, "#d4edda")]],
            }],
        );
        let err = AvailabilityCalendarSet::new(calendars)
            .validate()
            .unwrap_err();
        assert_eq!(
            err,
            PayloadError::MalformedWeek {
                hall: "grand".to_string(),
                month_index: 0,
                week_index: 0,
                len: 2,
            }
        );
    }

    #[test]
    fn test_payload_rejects_bad_month() {
        let mut calendars = HashMap::new();
        calendars.insert(
            "grand".to_string(),
            vec![MonthCalendar {
                year: 2024,
                month: 13,
                weeks: vec![blank_week()],
            }],
        );
        let err = AvailabilityCalendarSet::new(calendars)
            .validate()
            .unwrap_err();
        assert!(matches!(err, PayloadError::MonthOutOfRange { month: 13, .. }));
    }

    #[test]
    fn test_payload_rejects_bad_day() {
        let mut week = blank_week();
        week[3] = cell(32, "#d4edda");
        let mut calendars = HashMap::new();
        calendars.insert(
            "grand".to_string(),
            vec![MonthCalendar {
                year: 2024,
                month: 11,
                weeks: vec![week],
            }],
        );
        let err = AvailabilityCalendarSet::new(calendars)
            .validate()
            .unwrap_err();
        assert!(matches!(err, PayloadError::DayOutOfRange { day: 32, .. }));
    }

    #[test]
    fn test_payload_rejects_garbage() {
        let err = SitePayload::from_json("not json").unwrap_err();
        assert!(matches!(err, PayloadError::Parse(_)));
    }

    #[test]
    fn test_payload_error_display_names_hall_and_index() {
        let err = PayloadError::MonthOutOfRange {
            hall: "grand".to_string(),
            month_index: 3,
            month: 0,
        };
        let text = err.to_string();
        assert!(text.contains("grand"));
        assert!(text.contains("index 3"));
    }
}
