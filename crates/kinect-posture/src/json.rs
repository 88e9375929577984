//! JSON document format.
//!
//! ```json
//! { "name": "wave",
//!   "Points": [ { "X": 0.1, "Y": 0.5, "Z": 2.0,
//!                 "ScreenPoint": { "x": 320, "y": 120 },
//!                 "name": "Head" } ] }
//! ```
//!
//! Members of a point document default when absent. Screen coordinates may
//! be written as floats and are truncated toward zero. The posture `name`
//! defaults to empty when absent or not a string. `Points` is required.
//!
//! JSON has no NaN or infinity, so encoding a point with a non-finite
//! coordinate fails instead of writing `null`.

use crate::{Point3D, Posture, PostureError};
use kinect_base::{log, Vec2};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{json, Value};

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
struct PointDocument {
    #[serde(rename = "X")]
    x: f32,
    #[serde(rename = "Y")]
    y: f32,
    #[serde(rename = "Z")]
    z: f32,
    #[serde(rename = "ScreenPoint")]
    screen_point: ScreenPointDocument,
    name: String,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
struct ScreenPointDocument {
    #[serde(deserialize_with = "truncate_to_i32")]
    x: i32,
    #[serde(deserialize_with = "truncate_to_i32")]
    y: i32,
}

// Out of range values saturate at the i32 bounds.
fn truncate_to_i32<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i32, D::Error> {
    Ok(f64::deserialize(deserializer)? as i32)
}

impl From<PointDocument> for Point3D {
    fn from(doc: PointDocument) -> Self {
        Point3D::new(
            doc.x,
            doc.y,
            doc.z,
            Vec2::new(doc.screen_point.x, doc.screen_point.y),
            doc.name,
        )
    }
}

impl TryFrom<&Point3D> for PointDocument {
    type Error = PostureError;

    fn try_from(point: &Point3D) -> Result<Self, Self::Error> {
        let p = point.position;
        if !(p.x.is_finite() && p.y.is_finite() && p.z.is_finite()) {
            return Err(PostureError::Schema(format!(
                "joint `{}` has a non-finite coordinate ({}, {}, {})",
                point.name, p.x, p.y, p.z
            )));
        }
        Ok(PointDocument {
            x: p.x,
            y: p.y,
            z: p.z,
            screen_point: ScreenPointDocument {
                x: point.screen_point.x,
                y: point.screen_point.y,
            },
            name: point.name.clone(),
        })
    }
}

impl Point3D {
    pub fn from_json(value: &Value) -> Result<Self, PostureError> {
        Ok(PointDocument::deserialize(value)?.into())
    }

    pub fn to_json(&self) -> Result<Value, PostureError> {
        Ok(serde_json::to_value(PointDocument::try_from(self)?)?)
    }
}

impl Posture {
    pub fn from_json(value: &Value) -> Result<Self, PostureError> {
        let name = value
            .get("name")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();

        let elements = match value.get("Points") {
            Some(Value::Array(elements)) => elements,
            Some(_) => return Err(schema_error("`Points` is not an array")),
            None => return Err(schema_error("missing `Points` array")),
        };

        let points = elements
            .iter()
            .enumerate()
            .map(|(index, element)| {
                Point3D::from_json(element).map_err(|err| match err {
                    PostureError::Schema(msg) => PostureError::Schema(format!("Points[{index}]: {msg}")),
                    other => other,
                })
            })
            .collect::<Result<Vec<_>, _>>()
            .inspect_err(|err| log::warn!("rejecting posture document: {}", err))?;

        log::debug!("decoded posture `{}` with {} points", name, points.len());
        Ok(Posture::from_points(name, points))
    }

    pub fn from_json_str(text: &str) -> Result<Self, PostureError> {
        let value: Value = serde_json::from_str(text)?;
        Posture::from_json(&value)
    }

    /// Fails if any joint has a NaN or infinite coordinate.
    pub fn to_json(&self) -> Result<Value, PostureError> {
        let points = self
            .points
            .iter()
            .map(Point3D::to_json)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(json!({
            "name": self.name,
            "Points": points,
        }))
    }
}

fn schema_error(message: &str) -> PostureError {
    log::warn!("rejecting posture document: {}", message);
    PostureError::Schema(message.to_string())
}
