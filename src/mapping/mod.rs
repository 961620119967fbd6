//! CF-style coordinate interpolation mapping.
//!
//! An I/O collaborator serializes each coordinate dimension as three
//! artifacts (an interpolation-kind marker, an index array, a value array)
//! linked by a declared mapping string of the form
//! `"<dim>: <dim>_indices <dim>_values "`, one triple per dimension. This
//! module owns that string contract: producing it byte-for-byte, parsing
//! it back into `(dim, indices_ref, values_ref)` triples, and the artifact
//! naming helpers the collaborator uses.

use std::fmt;

use crate::coordinate::errors::CoordinateError;
use crate::coordinate::linear::LinearCoordinate;

/// One `dim: indices values` triple parsed from a mapping string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappingTriple {
    pub dim: String,
    pub indices_ref: String,
    pub values_ref: String,
}

/// Parses a coordinate interpolation mapping into its triples.
///
/// The accepted grammar is a whitespace-separated sequence of
/// `word: word word` groups. Anything else, including a trailing
/// incomplete group, is a [`CoordinateError::MalformedMapping`].
pub fn parse_mapping(mapping: &str) -> Result<Vec<MappingTriple>, CoordinateError> {
    let malformed = || CoordinateError::MalformedMapping {
        got: mapping.to_string(),
    };

    let mut triples = Vec::new();
    let mut tokens = mapping.split_whitespace();

    while let Some(head) = tokens.next() {
        let dim = head.strip_suffix(':').ok_or_else(malformed)?;
        let indices_ref = tokens.next().ok_or_else(malformed)?;
        let values_ref = tokens.next().ok_or_else(malformed)?;
        if dim.is_empty() || indices_ref.ends_with(':') || values_ref.ends_with(':') {
            return Err(malformed());
        }
        triples.push(MappingTriple {
            dim: dim.to_string(),
            indices_ref: indices_ref.to_string(),
            values_ref: values_ref.to_string(),
        });
    }

    if triples.is_empty() {
        return Err(malformed());
    }
    Ok(triples)
}

/// Name of the serialized tie-index array for `dim`.
pub fn indices_name(dim: &str) -> String {
    format!("{dim}_indices")
}

/// Name of the serialized tie-value array for `dim`.
pub fn values_name(dim: &str) -> String {
    format!("{dim}_values")
}

/// Name of the interpolation-kind marker variable for `dim`.
pub fn interpolation_name(dim: &str) -> String {
    format!("{dim}_interpolation")
}

/// Name of the tie-point dimension the index/value arrays live on.
pub fn tie_points_dim(dim: &str) -> String {
    format!("{dim}_points")
}

/// Interpolated coordinates for each dimension of an array, in insertion
/// order (the order the mapping string is produced in).
#[derive(Debug, Clone, Default)]
pub struct InterpolatedCoordinates {
    entries: Vec<(String, LinearCoordinate)>,
}

impl InterpolatedCoordinates {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a coordinate for `dim`, replacing any existing one in place.
    pub fn insert(&mut self, dim: impl Into<String>, coord: LinearCoordinate) {
        let dim = dim.into();
        match self.entries.iter_mut().find(|(d, _)| *d == dim) {
            Some(entry) => entry.1 = coord,
            None => self.entries.push((dim, coord)),
        }
    }

    pub fn get(&self, dim: &str) -> Option<&LinearCoordinate> {
        self.entries
            .iter()
            .find(|(d, _)| d == dim)
            .map(|(_, c)| c)
    }

    pub fn dims(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(d, _)| d.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &LinearCoordinate)> {
        self.entries.iter().map(|(d, c)| (d.as_str(), c))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The declared mapping string, one `"<dim>: <dim>_indices
    /// <dim>_values "` triple per dimension.
    ///
    /// The format, including the trailing space after each triple, is the
    /// on-disk contract of the CF-style convention this targets and must
    /// not change.
    pub fn mapping(&self) -> String {
        let mut mapping = String::new();
        for dim in self.dims() {
            mapping.push_str(&format!(
                "{dim}: {} {} ",
                indices_name(dim),
                values_name(dim)
            ));
        }
        mapping
    }
}

impl fmt::Display for InterpolatedCoordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Interpolated Coordinates:")?;
        for (dim, coord) in self.iter() {
            writeln!(f, "{:<12}({dim}) {coord}", format!("  * {dim}"))?;
        }
        Ok(())
    }
}
