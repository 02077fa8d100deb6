//! Go `time.Time` values.
//!
//! A [`Timestamp`] is a wall-clock reading plus the location it was taken
//! in. Only `time.Local` and `time.UTC` have a source form; every printer
//! renders timestamps in those locations as a `time.Date` call:
//!
//! ```text
//! time.Date(2008, time.April, 23, 9, 56, 23, 29, time.UTC)
//! ```

use chrono::{DateTime, Datelike, FixedOffset, Local, NaiveDateTime, Timelike, Utc};

use crate::codegen::EmitError;
use crate::printer::Printer;
use crate::types::{Field, Kind, Type};
use crate::value::{Reflect, Value};

const MONTHS: [&str; 12] = [
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
];

/// Where a [`Timestamp`] was read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Location {
    /// The local time zone of the program reading the emitted source.
    Local,
    Utc,
    /// A named fixed offset, such as Go's `time.FixedZone`. Has no source form.
    Fixed { name: String, offset: FixedOffset },
}

impl Location {
    /// The Go name of the location.
    pub fn name(&self) -> &str {
        match self {
            Self::Local => "Local",
            Self::Utc => "UTC",
            Self::Fixed { name, .. } => name,
        }
    }
}

/// A Go `time.Time`: wall-clock reading in a location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timestamp {
    pub wall: NaiveDateTime,
    pub location: Location,
}

impl Timestamp {
    pub fn new(wall: NaiveDateTime, location: Location) -> Self {
        Self { wall, location }
    }

    pub fn utc(wall: NaiveDateTime) -> Self {
        Self::new(wall, Location::Utc)
    }

    pub fn local(wall: NaiveDateTime) -> Self {
        Self::new(wall, Location::Local)
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(dt: DateTime<Utc>) -> Self {
        Self::utc(dt.naive_utc())
    }
}

impl From<DateTime<Local>> for Timestamp {
    fn from(dt: DateTime<Local>) -> Self {
        Self::local(dt.naive_local())
    }
}

impl From<DateTime<FixedOffset>> for Timestamp {
    fn from(dt: DateTime<FixedOffset>) -> Self {
        let offset = *dt.offset();
        Self::new(
            dt.naive_local(),
            Location::Fixed {
                name: offset.to_string(),
                offset,
            },
        )
    }
}

impl Reflect for Timestamp {
    /// `time.Time`, whose fields are all unexported.
    fn reflect_type() -> Type {
        Type::structure(
            "time",
            "Time",
            vec![
                Field::new("wall", Type::basic(Kind::Uint64)),
                Field::new("ext", Type::basic(Kind::Int64)),
                Field::new("loc", Type::string()),
            ],
        )
    }

    fn reflect(&self) -> Value {
        let utc = self.wall.and_utc();
        let fields = vec![
            u64::from(utc.timestamp_subsec_nanos()).reflect(),
            utc.timestamp().reflect(),
            self.location.name().reflect(),
        ];
        Value::structure(Self::reflect_type(), fields).with_host(self.clone())
    }
}

macro_rules! reflect_datetime {
    ($($tz:ty),*) => {
        $(
            impl Reflect for DateTime<$tz> {
                fn reflect_type() -> Type {
                    Timestamp::reflect_type()
                }

                fn reflect(&self) -> Value {
                    Timestamp::from(*self).reflect()
                }
            }
        )*
    };
}

reflect_datetime!(Utc, Local, FixedOffset);

/// The encoder every printer starts with for `time.Time`.
pub(crate) fn encode_timestamp(ts: &Timestamp, printer: &Printer) -> Result<String, EmitError> {
    let loc = match &ts.location {
        Location::Local | Location::Utc => ts.location.name(),
        Location::Fixed { name, .. } => {
            return Err(EmitError::UnsupportedLocation {
                location: name.clone(),
            });
        }
    };
    let p = match printer.package_identifier("time")? {
        Some(ident) => format!("{ident}."),
        None => String::new(),
    };
    let wall = &ts.wall;
    let month = MONTHS[wall.month0() as usize];
    Ok(format!(
        "{p}Date({}, {p}{month}, {}, {}, {}, {}, {}, {p}{loc})",
        wall.year(),
        wall.day(),
        wall.hour(),
        wall.minute(),
        wall.second(),
        wall.nanosecond(),
    ))
}
