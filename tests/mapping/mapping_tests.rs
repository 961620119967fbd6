use tiepoint::mapping::{
    indices_name, interpolation_name, parse_mapping, tie_points_dim, values_name,
    InterpolatedCoordinates, MappingTriple,
};
use tiepoint::{CoordinateError, LinearCoordinate};

type TiepointResult = Result<(), CoordinateError>;

fn coord() -> LinearCoordinate {
    LinearCoordinate::new(vec![0, 10, 20], vec![100.0, 200.0, 400.0]).unwrap()
}

#[test]
fn mapping_string_is_byte_exact() -> TiepointResult {
    let mut icoords = InterpolatedCoordinates::new();
    icoords.insert("time", coord());
    icoords.insert("distance", coord());

    // one triple per dimension, trailing space included: the on-disk
    // contract must be reproduced byte for byte
    assert_eq!(
        icoords.mapping(),
        "time: time_indices time_values distance: distance_indices distance_values "
    );
    Ok(())
}

#[test]
fn parse_inverts_the_mapping_format() -> TiepointResult {
    let mut icoords = InterpolatedCoordinates::new();
    icoords.insert("time", coord());
    icoords.insert("distance", coord());

    let triples = parse_mapping(&icoords.mapping())?;
    assert_eq!(
        triples,
        vec![
            MappingTriple {
                dim: "time".into(),
                indices_ref: "time_indices".into(),
                values_ref: "time_values".into(),
            },
            MappingTriple {
                dim: "distance".into(),
                indices_ref: "distance_indices".into(),
                values_ref: "distance_values".into(),
            },
        ]
    );
    Ok(())
}

#[test]
fn parse_accepts_arbitrary_reference_names() -> TiepointResult {
    let triples = parse_mapping("depth: d_idx d_val")?;
    assert_eq!(triples.len(), 1);
    assert_eq!(triples[0].dim, "depth");
    assert_eq!(triples[0].indices_ref, "d_idx");
    assert_eq!(triples[0].values_ref, "d_val");
    Ok(())
}

#[test]
fn malformed_mappings_are_rejected() {
    for mapping in [
        "",
        "time",
        "time:",
        "time: time_indices",
        "time time_indices time_values",
        "time: time_indices time_values distance:",
        ": a b",
    ] {
        let err = parse_mapping(mapping).unwrap_err();
        assert!(
            matches!(err, CoordinateError::MalformedMapping { .. }),
            "mapping {mapping:?} should be rejected"
        );
    }
}

#[test]
fn artifact_names_follow_the_convention() {
    assert_eq!(indices_name("time"), "time_indices");
    assert_eq!(values_name("time"), "time_values");
    assert_eq!(interpolation_name("time"), "time_interpolation");
    assert_eq!(tie_points_dim("time"), "time_points");
}

#[test]
fn insert_replaces_in_place_and_keeps_order() {
    let mut icoords = InterpolatedCoordinates::new();
    icoords.insert("time", coord());
    icoords.insert("distance", coord());

    let replacement =
        LinearCoordinate::new(vec![0, 5], vec![0.0, 50.0]).unwrap();
    icoords.insert("time", replacement);

    assert_eq!(icoords.len(), 2);
    assert_eq!(icoords.dims().collect::<Vec<_>>(), vec!["time", "distance"]);
    assert_eq!(icoords.get("time").unwrap().num_tie_points(), 2);
    assert!(icoords.get("depth").is_none());
}

#[test]
fn display_lists_each_dimension() {
    let mut icoords = InterpolatedCoordinates::new();
    icoords.insert("time", coord());

    let repr = icoords.to_string();
    assert!(repr.starts_with("Interpolated Coordinates:\n"));
    assert!(repr.contains("* time"));
    assert!(repr.contains("(time) 3 tie points from 100 to 400"));
}
