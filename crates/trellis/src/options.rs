//! Layout options sent alongside the graph.

use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident { $($variant:ident => $wire:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant,)+
            /// Any other value; sent to the engine as-is.
            Other(String),
        }

        impl $name {
            pub fn as_str(&self) -> &str {
                match self {
                    $($name::$variant => $wire,)+
                    $name::Other(s) => s.as_str(),
                }
            }

            pub fn parse(s: &str) -> Self {
                match s {
                    $($wire => $name::$variant,)+
                    other => $name::Other(other.to_string()),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let s = String::deserialize(deserializer)?;
                Ok(Self::parse(&s))
            }
        }
    };
}

string_enum! {
    pub enum EdgeRouting {
        Orthogonal => "ORTHOGONAL",
        Polyline => "POLYLINE",
        Splines => "SPLINES",
        Undefined => "UNDEFINED",
    }
}

string_enum! {
    pub enum Direction {
        Up => "UP",
        Down => "DOWN",
        Left => "LEFT",
        Right => "RIGHT",
        Undefined => "UNDEFINED",
    }
}

impl Default for EdgeRouting {
    fn default() -> Self {
        EdgeRouting::Orthogonal
    }
}

impl Default for Direction {
    fn default() -> Self {
        Direction::Down
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LayoutOptions {
    /// Gap between nodes.
    pub spacing: f64,
    pub edge_routing: EdgeRouting,
    pub direction: Direction,
    pub merge_edges: bool,
    pub int_coordinates: bool,
    pub debug_mode: bool,
    /// Engine options this crate does not interpret.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            spacing: 80.0,
            edge_routing: EdgeRouting::Orthogonal,
            direction: Direction::Down,
            merge_edges: true,
            int_coordinates: true,
            debug_mode: true,
            extra: Map::new(),
        }
    }
}

/// Caller-supplied options. Every `None` falls back to the [`LayoutOptions`] default.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LayoutOptionsOverrides {
    pub spacing: Option<f64>,
    pub edge_routing: Option<EdgeRouting>,
    pub direction: Option<Direction>,
    pub merge_edges: Option<bool>,
    pub int_coordinates: Option<bool>,
    pub debug_mode: Option<bool>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl LayoutOptionsOverrides {
    pub fn spacing(mut self, spacing: f64) -> Self {
        self.spacing = Some(spacing);
        self
    }

    pub fn edge_routing(mut self, edge_routing: EdgeRouting) -> Self {
        self.edge_routing = Some(edge_routing);
        self
    }

    pub fn direction(mut self, direction: Direction) -> Self {
        self.direction = Some(direction);
        self
    }

    pub fn merge_edges(mut self, merge_edges: bool) -> Self {
        self.merge_edges = Some(merge_edges);
        self
    }

    pub fn int_coordinates(mut self, int_coordinates: bool) -> Self {
        self.int_coordinates = Some(int_coordinates);
        self
    }

    pub fn debug_mode(mut self, debug_mode: bool) -> Self {
        self.debug_mode = Some(debug_mode);
        self
    }

    pub fn extra(mut self, key: impl Into<String>, value: Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }
}

impl LayoutOptions {
    /// Defaults with `overrides` applied field by field.
    pub fn resolve(overrides: LayoutOptionsOverrides) -> Self {
        Self::default().with_overrides(overrides)
    }

    pub fn with_overrides(self, overrides: LayoutOptionsOverrides) -> Self {
        let mut extra = self.extra;
        for (key, value) in overrides.extra {
            match extra.get_mut(&key) {
                Some(slot) => deep_merge_value(slot, &value),
                None => {
                    extra.insert(key, value);
                }
            }
        }
        Self {
            spacing: overrides.spacing.unwrap_or(self.spacing),
            edge_routing: overrides.edge_routing.unwrap_or(self.edge_routing),
            direction: overrides.direction.unwrap_or(self.direction),
            merge_edges: overrides.merge_edges.unwrap_or(self.merge_edges),
            int_coordinates: overrides.int_coordinates.unwrap_or(self.int_coordinates),
            debug_mode: overrides.debug_mode.unwrap_or(self.debug_mode),
            extra,
        }
    }

    /// Deep-merges a JSON object over these options. Caller values win at every nesting level;
    /// keys the caller leaves out keep their current value.
    pub fn merged_with(&self, user: &Value) -> serde_json::Result<Self> {
        let mut base = serde_json::to_value(self)?;
        deep_merge_value(&mut base, user);
        serde_json::from_value(base)
    }
}

fn deep_merge_value(base: &mut Value, incoming: &Value) {
    match (base, incoming) {
        (Value::Object(base_map), Value::Object(in_map)) => {
            for (key, in_value) in in_map {
                match base_map.get_mut(key) {
                    Some(base_value) => deep_merge_value(base_value, in_value),
                    None => {
                        base_map.insert(key.clone(), in_value.clone());
                    }
                }
            }
        }
        (base_slot, in_value) => {
            *base_slot = in_value.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deep_merge_replaces_scalars_and_merges_objects() {
        let mut base = json!({"a": 1, "nested": {"x": 1, "y": 2}, "list": [1, 2]});
        deep_merge_value(&mut base, &json!({"nested": {"y": 3}, "list": [9]}));
        assert_eq!(base, json!({"a": 1, "nested": {"x": 1, "y": 3}, "list": [9]}));
    }

    #[test]
    fn deep_merge_replaces_object_with_scalar() {
        let mut base = json!({"nested": {"x": 1}});
        deep_merge_value(&mut base, &json!({"nested": false}));
        assert_eq!(base, json!({"nested": false}));
    }

    #[test]
    fn string_enums_round_trip_unknown_values() {
        assert_eq!(EdgeRouting::parse("SPLINES"), EdgeRouting::Splines);
        assert_eq!(
            Direction::parse("diagonal"),
            Direction::Other("diagonal".to_string())
        );
        assert_eq!(Direction::Other("diagonal".into()).as_str(), "diagonal");
        assert_eq!(Direction::Right.to_string(), "RIGHT");
    }
}
