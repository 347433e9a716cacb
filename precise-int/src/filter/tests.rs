use super::*;

/// Records every call made by the filter
#[derive(Default)]
struct RecordingQuery {
    unique_id: u64,
    where_calls: Vec<(Condition, String)>,
    bind_calls: Vec<(String, i64)>,
}

impl RecordingQuery {
    fn with_id(unique_id: u64) -> Self {
        Self {
            unique_id,
            ..Self::default()
        }
    }
}

impl ProxyQuery for RecordingQuery {
    fn unique_parameter_id(&mut self) -> u64 {
        self.unique_id
    }

    fn and_where(&mut self, clause: String) {
        self.where_calls.push((Condition::And, clause));
    }

    fn or_where(&mut self, clause: String) {
        self.where_calls.push((Condition::Or, clause));
    }

    fn set_parameter(&mut self, name: &str, value: i64) {
        self.bind_calls.push((name.to_string(), value));
    }
}

fn test_filter() -> PreciseIntFilter {
    PreciseIntFilter::new("test_filter", FilterOptions::default())
}

#[test]
fn test_no_value_binds_nothing() {
    let mut query = RecordingQuery::default();
    let applied = test_filter()
        .apply(&mut query, "e", "field", &FilterData::default())
        .unwrap();
    assert!(!applied);
    assert!(query.bind_calls.is_empty());
    assert!(query.where_calls.is_empty());
}

#[test]
fn test_non_numeric_value_binds_nothing() {
    for value in ["not_a_number", "", "12.34.56", "NaN"] {
        let mut query = RecordingQuery::default();
        let applied = test_filter()
            .apply(&mut query, "entity", "field", &FilterData::with_value(value))
            .unwrap();
        assert!(!applied, "{:?} should not be applied", value);
        assert!(query.bind_calls.is_empty());
        assert!(query.where_calls.is_empty());
    }
}

#[test]
fn test_numeric_value_binds_once() {
    let mut query = RecordingQuery::with_id(123);
    let applied = test_filter()
        .apply(&mut query, "entity", "price", &FilterData::with_value("12.34"))
        .unwrap();
    assert!(applied);
    assert_eq!(query.bind_calls, vec![("test_filter_123".to_string(), 1234)]);
    assert_eq!(
        query.where_calls,
        vec![(
            Condition::And,
            "entity.price = :test_filter_123".to_string()
        )]
    );
}

#[test]
fn test_zero_value_binds_zero() {
    let mut query = RecordingQuery::with_id(789);
    test_filter()
        .apply(&mut query, "entity", "field", &FilterData::with_value("0.00"))
        .unwrap();
    assert_eq!(query.bind_calls, vec![("test_filter_789".to_string(), 0)]);
}

#[test]
fn test_number_values() {
    let mut query = RecordingQuery::with_id(1);
    test_filter()
        .apply(&mut query, "o", "total", &FilterData::with_value(99.99))
        .unwrap();
    test_filter()
        .apply(&mut query, "o", "total", &FilterData::with_value(42))
        .unwrap();
    let values: Vec<i64> = query.bind_calls.iter().map(|(_, v)| *v).collect();
    assert_eq!(values, vec![9999, 4200]);
}

#[test]
fn test_each_operator() {
    for (op, symbol) in crate::operator::CHOICES {
        let mut query = RecordingQuery::with_id(5);
        let data = FilterData::new(Some("-25.75".into()), Some(op.code()));
        test_filter().apply(&mut query, "e", "amount", &data).unwrap();
        assert_eq!(
            query.where_calls[0].1,
            format!("e.amount {} :test_filter_5", symbol)
        );
        assert_eq!(query.bind_calls[0].1, -2575);
    }
}

#[test]
fn test_unsupported_operator_fails_before_binding() {
    let mut query = RecordingQuery::default();
    let data = FilterData::new(Some("12.34".into()), Some(999));
    let err = test_filter()
        .apply(&mut query, "e", "amount", &data)
        .unwrap_err();
    assert!(err.to_string().starts_with("The type \"999\" is not supported"));
    assert!(query.bind_calls.is_empty());
    assert!(query.where_calls.is_empty());
}

#[test]
fn test_unsupported_operator_ignored_without_value() {
    let mut query = RecordingQuery::default();
    let data = FilterData::new(None, Some(999));
    assert!(!test_filter().apply(&mut query, "e", "amount", &data).unwrap());
}

#[test]
fn test_or_condition() {
    let options = FilterOptions {
        condition: Condition::Or,
        ..FilterOptions::default()
    };
    let filter = PreciseIntFilter::new("price", options);
    let mut query = RecordingQuery::with_id(2);
    filter
        .apply(&mut query, "p", "cents", &FilterData::with_value("1.5"))
        .unwrap();
    assert_eq!(
        query.where_calls,
        vec![(Condition::Or, "p.cents = :price_2".to_string())]
    );
}

#[test]
fn test_custom_precision() {
    let options = FilterOptions {
        precision: 3,
        ..FilterOptions::default()
    };
    let filter = PreciseIntFilter::new("weight", options);
    let mut query = RecordingQuery::default();
    filter
        .apply(&mut query, "w", "grams", &FilterData::with_value("1.2345"))
        .unwrap();
    assert_eq!(query.bind_calls, vec![("weight_0".to_string(), 1235)]);
}

#[test]
fn test_out_of_range_value_is_an_error() {
    for value in ["1e30", "1e9223372036854775806", "1e9223372036854775807"] {
        let mut query = RecordingQuery::default();
        let err = test_filter()
            .apply(&mut query, "e", "amount", &FilterData::with_value(value))
            .unwrap_err();
        assert_eq!(err, FilterError::OutOfRange(value.to_string()));
        assert!(query.bind_calls.is_empty());
        assert!(query.where_calls.is_empty());
    }
}

#[test]
fn test_tiny_exponent_binds_zero() {
    for value in ["1e-400", "1e-99999999999999999999", "-2.5e-9223372036854775808"] {
        let mut query = RecordingQuery::with_id(4);
        let applied = test_filter()
            .apply(&mut query, "e", "amount", &FilterData::with_value(value))
            .unwrap();
        assert!(applied, "{:?} should be applied", value);
        assert_eq!(query.bind_calls, vec![("test_filter_4".to_string(), 0)]);
    }
}

#[test]
fn test_where_clause_builder_rendering() {
    let amount = PreciseIntFilter::new("amount", FilterOptions::default());
    let either = PreciseIntFilter::new(
        "either",
        FilterOptions {
            condition: Condition::Or,
            ..FilterOptions::default()
        },
    );

    let mut builder = WhereClauseBuilder::with_start_id(10);
    amount
        .apply(
            &mut builder,
            "o",
            "total",
            &FilterData::new(Some("10".into()), Some(OperatorCode::GreaterEqual.code())),
        )
        .unwrap();
    either
        .apply(
            &mut builder,
            "o",
            "tax",
            &FilterData::new(Some("0.5".into()), Some(OperatorCode::LessThan.code())),
        )
        .unwrap();
    either
        .apply(&mut builder, "o", "fee", &FilterData::with_value("0"))
        .unwrap();

    assert_eq!(
        builder.to_sql(),
        "o.total >= :amount_10 AND (o.tax < :either_11 OR o.fee = :either_12)"
    );
    assert_eq!(
        builder.parameters(),
        &[
            ("amount_10".to_string(), 1000),
            ("either_11".to_string(), 50),
            ("either_12".to_string(), 0),
        ]
    );
    assert_eq!(builder.parameter("either_11"), Some(50));
    assert_eq!(builder.parameter("missing"), None);
}

#[test]
fn test_empty_builder() {
    let builder = WhereClauseBuilder::new();
    assert!(builder.is_empty());
    assert_eq!(builder.to_sql(), "");
}

#[test]
fn test_default_and_form_options() {
    let defaults = PreciseIntFilter::default_options();
    assert_eq!(defaults.field_type, "number");
    assert_eq!(defaults.precision, 2);
    assert_eq!(defaults.condition, Condition::And);

    let filter = PreciseIntFilter::new(
        "price",
        FilterOptions {
            label: Some("Price".to_string()),
            ..FilterOptions::default()
        },
    );
    let form = filter.form_options();
    assert_eq!(form.field_type, "number");
    assert!(form.field_options.is_empty());
    assert_eq!(form.label.as_deref(), Some("Price"));
    assert_eq!(form.operator_type, "number_operator");
}

#[test]
fn test_field_options_reach_form_options() {
    let options = FilterOptions::from_json(
        r#"{"label": "Price", "field_options": {"scale": 2, "html5": true}}"#,
    )
    .unwrap();
    let form = PreciseIntFilter::new("price", options).form_options();
    assert_eq!(form.field_options.len(), 2);
    assert_eq!(form.field_options["scale"], serde_json::json!(2));
    assert_eq!(form.field_options["html5"], serde_json::json!(true));

    let rendered = serde_json::to_value(&form).unwrap();
    assert_eq!(rendered["field_options"]["scale"], serde_json::json!(2));
    assert_eq!(rendered["operator_type"], "number_operator");
}

#[test]
fn test_filter_data_from_json() {
    let data = FilterData::from_json(r#"{"value": "12.34", "type": 1}"#).unwrap();
    assert_eq!(data.value, Some(NumericValue::Text("12.34".to_string())));
    assert_eq!(data.operator_type, Some(1));

    let data = FilterData::from_json("{}").unwrap();
    assert!(!data.has_value());

    let data = FilterData::from_json(r#"{"value": 42}"#).unwrap();
    assert_eq!(data.value, Some(NumericValue::Integer(42)));
}

#[test]
fn test_options_from_json() {
    let options = FilterOptions::from_json(r#"{"label": "Total", "condition": "or"}"#).unwrap();
    assert_eq!(options.label.as_deref(), Some("Total"));
    assert_eq!(options.condition, Condition::Or);
    assert_eq!(options.precision, 2);

    assert_eq!(
        FilterOptions::from_json(r#"{"precision": 40}"#),
        Err(FilterError::InvalidPrecision(40))
    );
    assert!(matches!(
        FilterOptions::from_json("not json"),
        Err(FilterError::InvalidOptions(_))
    ));
}
