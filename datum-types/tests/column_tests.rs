use std::cmp::Ordering;

use datum_types::{INVALID_DAY_COUNT, Kind, MIN_DAY_COUNT, Value, build_column, strategy, value_at};

fn dates(texts: &[&str]) -> Vec<Value> {
    texts
        .iter()
        .map(|t| Value::from_text(Kind::Date, t).unwrap())
        .collect()
}

#[test]
fn columnar_sort_matches_value_sort() {
    let values = dates(&["2020-10-21", "1970-01-01", "2020-01-21", "1969-12-31"]);
    let col = build_column(Kind::Date, &values).unwrap();
    let date = strategy(Kind::Date);

    let mut order: Vec<usize> = (0..values.len()).collect();
    order.sort_by(|&a, &b| {
        date.compare_columns(col.as_ref(), col.as_ref(), a, b)
            .unwrap_or(Ordering::Equal)
    });
    let rendered: Vec<String> = order
        .iter()
        .map(|&i| value_at(col.as_ref(), i).unwrap().as_text())
        .collect();
    assert_eq!(
        rendered,
        ["1969-12-31", "1970-01-01", "2020-01-21", "2020-10-21"]
    );
}

#[test]
fn every_kind_survives_a_column() {
    let rows = [
        (Kind::Integer, vec![Value::Integer(-3), Value::Integer(9)]),
        (Kind::Float, vec![Value::Float(0.25), Value::Float(-1.5)]),
        (Kind::Boolean, vec![Value::Boolean(false), Value::Boolean(true)]),
        (Kind::Text, vec![Value::from("a"), Value::from("")]),
        (Kind::Date, dates(&["0001-01-01", "9999-12-31"])),
    ];
    for (kind, values) in rows {
        let col = build_column(kind, &values).unwrap();
        for (i, v) in values.iter().enumerate() {
            assert_eq!(&value_at(col.as_ref(), i).unwrap(), v, "{kind}[{i}]");
        }
        assert_eq!(
            strategy(kind).compare_columns(col.as_ref(), col.as_ref(), 0, 0),
            Some(Ordering::Equal)
        );
    }
}

#[test]
fn date_strategy_refuses_integer_columns() {
    let ints = build_column(Kind::Integer, &[Value::Integer(18282)]).unwrap();
    let dts = build_column(Kind::Date, &dates(&["2020-01-21"])).unwrap();
    assert_eq!(
        strategy(Kind::Date).compare_columns(dts.as_ref(), ints.as_ref(), 0, 0),
        None
    );
}

#[test]
fn date_column_refuses_sentinel_and_pre_year_one() {
    let mut values = dates(&["2020-01-21"]);
    values.push(Value::Date(INVALID_DAY_COUNT));
    assert!(build_column(Kind::Date, &values).unwrap_err().is_invalid_argument());

    let early = [Value::Date(MIN_DAY_COUNT), Value::Date(MIN_DAY_COUNT - 1)];
    assert!(build_column(Kind::Date, &early).unwrap_err().is_invalid_argument());

    let col = build_column(Kind::Date, &early[..1]).unwrap();
    assert_eq!(value_at(col.as_ref(), 0).unwrap().as_text(), "0001-01-01");
}
