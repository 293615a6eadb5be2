//! GeoJSON views of extracted records. Positions are `[longitude, latitude]`.

use serde::Serialize;

use crate::types::{AnchorRecord, ConnectionRecord, LonLat, PoleRecord};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum Geometry {
  Point { coordinates: [f64; 2] },
  LineString { coordinates: Vec<[f64; 2]> },
}

impl Geometry {
  pub fn point(latitude: f64, longitude: f64) -> Self {
    Geometry::Point {
      coordinates: [longitude, latitude],
    }
  }

  pub fn line(points: &[LonLat]) -> Self {
    Geometry::LineString {
      coordinates: points.iter().map(|p| [p.longitude, p.latitude]).collect(),
    }
  }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Feature<P> {
  #[serde(rename = "type")]
  kind: &'static str,
  /// `null` for records without a location.
  pub geometry: Option<Geometry>,
  pub properties: P,
}

impl<P> Feature<P> {
  pub fn new(geometry: Option<Geometry>, properties: P) -> Self {
    Self {
      kind: "Feature",
      geometry,
      properties,
    }
  }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureCollection<P> {
  #[serde(rename = "type")]
  kind: &'static str,
  pub features: Vec<Feature<P>>,
}

impl<P> FeatureCollection<P> {
  pub fn new(features: Vec<Feature<P>>) -> Self {
    Self {
      kind: "FeatureCollection",
      features,
    }
  }
}

impl<P> FromIterator<Feature<P>> for FeatureCollection<P> {
  fn from_iter<I: IntoIterator<Item = Feature<P>>>(iter: I) -> Self {
    Self::new(iter.into_iter().collect())
  }
}

pub fn pole_features(poles: &[PoleRecord]) -> FeatureCollection<&PoleRecord> {
  poles
    .iter()
    .map(|pole| Feature::new(Some(Geometry::point(pole.latitude, pole.longitude)), pole))
    .collect()
}

/// Anchors missing either coordinate get a `null` geometry.
pub fn anchor_features(anchors: &[AnchorRecord]) -> FeatureCollection<&AnchorRecord> {
  anchors
    .iter()
    .map(|anchor| {
      let geometry = anchor
        .latitude
        .zip(anchor.longitude)
        .map(|(lat, lon)| Geometry::point(lat, lon));
      Feature::new(geometry, anchor)
    })
    .collect()
}

pub fn connection_features(connections: &[ConnectionRecord]) -> FeatureCollection<&ConnectionRecord> {
  connections
    .iter()
    .map(|c| Feature::new(Some(Geometry::line(&[c.start, c.end])), c))
    .collect()
}
