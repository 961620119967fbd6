use chrono::{DateTime, Utc};

use tiepoint::coordinate::rounding::Rounding;
use tiepoint::coordinate::scale::ScaleOffset;
use tiepoint::{CoordinateError, LinearCoordinate, Value, ValueArray, ValueKind};

type TiepointResult = Result<(), CoordinateError>;

fn ts(micros: i64) -> DateTime<Utc> {
    DateTime::from_timestamp_micros(micros).unwrap()
}

#[test]
fn numeric_arrays_use_the_identity_transform() -> TiepointResult {
    let arr = ValueArray::Number(vec![3.0, 7.0]);
    let transform = ScaleOffset::floatize(&arr)?;

    assert_eq!(transform, ScaleOffset::Identity);
    assert_eq!(transform.direct(Value::Number(7.0))?, 7.0);
    assert_eq!(transform.inverse(7.5)?, Value::Number(7.5));
    Ok(())
}

#[test]
fn datetime_arrays_anchor_on_their_first_element() -> TiepointResult {
    let origin = ts(1_000_000);
    let arr = ValueArray::DateTime(vec![origin, ts(5_000_000)]);
    let transform = ScaleOffset::floatize(&arr)?;

    assert_eq!(transform, ScaleOffset::Epoch { origin });
    assert_eq!(transform.direct(Value::DateTime(origin))?, 0.0);
    assert_eq!(transform.direct(Value::DateTime(ts(5_000_000)))?, 4_000_000.0);
    Ok(())
}

#[test]
fn datetime_round_trip_is_exact_to_the_microsecond() -> TiepointResult {
    let arr = ValueArray::DateTime(vec![ts(123_456_789), ts(987_654_321)]);
    let transform = ScaleOffset::floatize(&arr)?;

    for v in arr.iter() {
        let f = transform.direct(v)?;
        assert_eq!(transform.inverse(f)?, v);
    }
    Ok(())
}

#[test]
fn inverse_rounds_fractional_ticks_to_even() -> TiepointResult {
    let transform = ScaleOffset::Epoch { origin: ts(0) };

    assert_eq!(transform.inverse(0.5)?, Value::DateTime(ts(0)));
    assert_eq!(transform.inverse(1.5)?, Value::DateTime(ts(2)));
    assert_eq!(transform.inverse(2.4)?, Value::DateTime(ts(2)));
    Ok(())
}

#[test]
fn kind_mismatch_is_an_error() {
    let transform = ScaleOffset::Identity;
    let err = transform.direct(Value::DateTime(ts(0))).unwrap_err();
    assert!(matches!(
        err,
        CoordinateError::KindMismatch {
            expected: ValueKind::Number,
            got: ValueKind::DateTime
        }
    ));
}

#[test]
fn floatize_of_an_empty_datetime_array_fails() {
    let err = ScaleOffset::floatize(&ValueArray::DateTime(vec![])).unwrap_err();
    assert!(matches!(err, CoordinateError::EmptyInput));
}

#[test]
fn calendar_coordinate_interpolates_without_precision_loss() -> TiepointResult {
    let coord = LinearCoordinate::new(
        vec![0, 10],
        vec![ts(1_700_000_000_000_000), ts(1_700_000_010_000_000)],
    )?;

    // one second per index step
    let midpoint = coord.value_at(5.0)?;
    assert_eq!(midpoint, Value::DateTime(ts(1_700_000_005_000_000)));

    assert_eq!(coord.index_at(midpoint, Rounding::Nearest)?, 5);
    assert_eq!(coord.value_kind(), ValueKind::DateTime);
    Ok(())
}
