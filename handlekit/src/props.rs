//! Handle properties: user overrides merged over declared defaults.

use std::fmt;
use std::str::FromStr;

use dragdom::Axis;
use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer};

use crate::observer::ProgressObserver;
use crate::HandleError;

/// Axis the handle is dragged along.
///
/// Progress grows to the right for `X` and upwards for `Y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum Direction {
    #[default]
    X,
    Y,
}

impl Direction {
    pub fn axis(self) -> Axis {
        match self {
            Direction::X => Axis::X,
            Direction::Y => Axis::Y,
        }
    }

    /// Sign mapping screen coordinates to progress coordinates.
    /// Screen Y grows downwards, progress grows upwards.
    pub fn sign(self) -> f64 {
        match self {
            Direction::X => 1.0,
            Direction::Y => -1.0,
        }
    }
}

impl FromStr for Direction {
    type Err = HandleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "x" => Ok(Direction::X),
            "y" => Ok(Direction::Y),
            other => Err(HandleError::InvalidDirection(other.to_string())),
        }
    }
}

impl TryFrom<String> for Direction {
    type Error = HandleError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::X => write!(f, "x"),
            Direction::Y => write!(f, "y"),
        }
    }
}

/// User-supplied overrides. Every field is optional; unset fields take the
/// defaults from [`HandleConfig::default`].
///
/// Deserializes from camelCase keys (`minBound`, `snapStrength`, ...).
/// `parent` is the ID of the container element in the document. JSON cannot
/// carry a callback, so an `onProgress` key (usually `null`) is accepted and
/// ignored; observers are attached with [`on_progress`](Self::on_progress).
#[derive(Default, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct HandleOptions {
    pub class_name: Option<String>,
    pub parent: Option<String>,
    pub min_bound: Option<f64>,
    pub max_bound: Option<f64>,
    pub is_bound: Option<bool>,
    pub is_inversed: Option<bool>,
    pub direction: Option<Direction>,
    pub snap_point: Option<f64>,
    pub snap_strength: Option<f64>,
    #[serde(deserialize_with = "ignore_callback")]
    pub on_progress: Option<Box<dyn ProgressObserver>>,
}

fn ignore_callback<'de, D>(deserializer: D) -> Result<Option<Box<dyn ProgressObserver>>, D::Error>
where
    D: Deserializer<'de>,
{
    IgnoredAny::deserialize(deserializer)?;
    Ok(None)
}

impl HandleOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse options from a JSON object.
    pub fn from_json(json: &str) -> Result<Self, HandleError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    pub fn parent(mut self, id: impl Into<String>) -> Self {
        self.parent = Some(id.into());
        self
    }

    pub fn min_bound(mut self, min: f64) -> Self {
        self.min_bound = Some(min);
        self
    }

    pub fn max_bound(mut self, max: f64) -> Self {
        self.max_bound = Some(max);
        self
    }

    pub fn bound(mut self, is_bound: bool) -> Self {
        self.is_bound = Some(is_bound);
        self
    }

    pub fn inversed(mut self, is_inversed: bool) -> Self {
        self.is_inversed = Some(is_inversed);
        self
    }

    pub fn direction(mut self, direction: Direction) -> Self {
        self.direction = Some(direction);
        self
    }

    pub fn snap(mut self, point: f64, strength: f64) -> Self {
        self.snap_point = Some(point);
        self.snap_strength = Some(strength);
        self
    }

    pub fn on_progress(mut self, observer: impl ProgressObserver + 'static) -> Self {
        self.on_progress = Some(Box::new(observer));
        self
    }
}

impl fmt::Debug for HandleOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HandleOptions")
            .field("class_name", &self.class_name)
            .field("parent", &self.parent)
            .field("min_bound", &self.min_bound)
            .field("max_bound", &self.max_bound)
            .field("is_bound", &self.is_bound)
            .field("is_inversed", &self.is_inversed)
            .field("direction", &self.direction)
            .field("snap_point", &self.snap_point)
            .field("snap_strength", &self.snap_strength)
            .field("on_progress", &self.on_progress.is_some())
            .finish()
    }
}

/// Resolved handle configuration.
///
/// Fixed at construction. The live progress bounds start from `min_bound`
/// and `max_bound` here but are tracked in [`HandleState`](crate::HandleState).
#[derive(Debug, Clone, PartialEq)]
pub struct HandleConfig {
    /// Extra classes for the root element.
    pub class_name: String,
    /// Container to measure; `None` is the document root.
    pub parent: Option<String>,
    pub min_bound: f64,
    pub max_bound: f64,
    /// Styling hook only.
    pub is_bound: bool,
    /// Styling hook only. Does not flip the math; `direction` does.
    pub is_inversed: bool,
    pub direction: Direction,
    pub snap_point: f64,
    /// Radius, in progress units, around `snap_point` that snaps.
    pub snap_strength: f64,
}

impl Default for HandleConfig {
    fn default() -> Self {
        Self {
            class_name: String::new(),
            parent: None,
            min_bound: 0.0,
            max_bound: 1.0,
            is_bound: false,
            is_inversed: false,
            direction: Direction::X,
            snap_point: 0.0,
            snap_strength: 0.0,
        }
    }
}

impl HandleConfig {
    /// Merge overrides over the defaults.
    pub fn from_options(options: &HandleOptions) -> Self {
        let defaults = Self::default();
        Self {
            class_name: options.class_name.clone().unwrap_or(defaults.class_name),
            parent: options.parent.clone().or(defaults.parent),
            min_bound: options.min_bound.unwrap_or(defaults.min_bound),
            max_bound: options.max_bound.unwrap_or(defaults.max_bound),
            is_bound: options.is_bound.unwrap_or(defaults.is_bound),
            is_inversed: options.is_inversed.unwrap_or(defaults.is_inversed),
            direction: options.direction.unwrap_or(defaults.direction),
            snap_point: options.snap_point.unwrap_or(defaults.snap_point),
            snap_strength: options.snap_strength.unwrap_or(defaults.snap_strength),
        }
    }
}
