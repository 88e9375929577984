//! Delimited text format.
//!
//! Input is `x,y,z,screenX,screenY,name` records joined by `;`. Output from
//! `Display` writes fields joined by `", "` and records back to back with no
//! separator, so it cannot be read back with [`Posture::from_text`].

use crate::{Point3D, Posture, PostureError};
use kinect_base::{log, Vec2};
use std::fmt;
use std::str::FromStr;

const RECORD_SEPARATOR: char = ';';
const FIELD_SEPARATOR: char = ',';
const FIELD_COUNT: usize = 6;

impl Posture {
    /// Parse the delimited text format.
    ///
    /// Empty records are skipped. Fields are not trimmed; fields after the
    /// sixth are ignored. Screen coordinates must fit in `i32`. The name of
    /// the result is empty.
    pub fn from_text(text: &str) -> Result<Self, PostureError> {
        let mut points = Vec::new();
        for (index, record) in text.split(RECORD_SEPARATOR).enumerate() {
            if record.is_empty() {
                continue;
            }
            match parse_record(index, record) {
                Ok(point) => points.push(point),
                Err(err) => {
                    log::warn!("rejecting posture text: {}", err);
                    return Err(err);
                }
            }
        }
        log::debug!("parsed posture text with {} points", points.len());
        Ok(Posture::from_points("", points))
    }
}

impl FromStr for Posture {
    type Err = PostureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Posture::from_text(s)
    }
}

fn parse_record(index: usize, record: &str) -> Result<Point3D, PostureError> {
    let fields: Vec<&str> = record.split(FIELD_SEPARATOR).collect();
    if fields.len() < FIELD_COUNT {
        return Err(PostureError::Parse {
            record: index,
            message: format!("expected {} fields, found {}", FIELD_COUNT, fields.len()),
        });
    }

    let coordinate = |i: usize, label: &str| -> Result<f32, PostureError> {
        fields[i].parse::<f32>().map_err(|err| PostureError::Parse {
            record: index,
            message: format!("{label} `{}`: {err}", fields[i]),
        })
    };
    let pixel = |i: usize, label: &str| -> Result<i32, PostureError> {
        fields[i].parse::<i32>().map_err(|err| PostureError::Parse {
            record: index,
            message: format!("{label} `{}`: {err}", fields[i]),
        })
    };

    let x = coordinate(0, "x")?;
    let y = coordinate(1, "y")?;
    let z = coordinate(2, "z")?;
    let screen_point = Vec2::new(pixel(3, "screen x")?, pixel(4, "screen y")?);

    Ok(Point3D::new(x, y, z, screen_point, fields[5]))
}

impl fmt::Display for Point3D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.3}, {:.3}, {:.3}, {}, {}, {}",
            self.position.x,
            self.position.y,
            self.position.z,
            self.screen_point.x,
            self.screen_point.y,
            self.name
        )
    }
}

impl fmt::Display for Posture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for point in &self.points {
            write!(f, "{point}")?;
        }
        Ok(())
    }
}
