use chrono::{DateTime, TimeZone, Utc};
use flynn::stmt::{Holder, Value};
use flynn::{Binding, Record, Serializable};
use pretty_assertions::assert_eq;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Sub-document stored as `label|size`.
#[derive(Debug, Default, Clone, PartialEq)]
struct Sub {
    label: String,
    size: i32,
}

impl Serializable for Sub {
    fn data(&self) -> Vec<u8> {
        format!("{}|{}", self.label, self.size).into_bytes()
    }

    fn parse_data(&mut self, data: &[u8]) -> flynn::Result<()> {
        let text = std::str::from_utf8(data).map_err(anyhow::Error::from)?;
        let Some((label, size)) = text.split_once('|') else {
            return Err(flynn::Error::from(anyhow::anyhow!("missing separator")));
        };

        self.label = label.to_string();
        self.size = size.parse()?;
        Ok(())
    }
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
struct Permission {
    read: String,
    write: String,
}

#[derive(Debug, Default, Clone, PartialEq, Record)]
struct TestRecord {
    #[flynn("ID:key")]
    id: i64,

    #[flynn("Name")]
    name: String,

    #[flynn("Sub:sub")]
    sub: Option<Box<Sub>>,

    #[flynn("Perm:YAML")]
    perm: Option<Box<Permission>>,
}

#[derive(Debug, Default, Clone, PartialEq, Record)]
struct Address {
    #[flynn("Street")]
    street: String,
    city: String,
    zip: Option<String>,
}

#[derive(Debug, Default, Clone, PartialEq, Record)]
struct Manager {
    manager_name: String,
}

#[derive(Debug, Default, Clone, PartialEq, Record)]
struct Skill {
    #[flynn("Skill")]
    name: String,
    years: i16,
}

#[derive(Debug, Default, Clone, PartialEq, Record)]
struct Employee {
    #[flynn("ID:key")]
    id: i64,

    #[flynn(":isn")]
    seq: u64,

    first_name: String,

    #[flynn("Birth")]
    birth: Option<DateTime<Utc>>,

    address: Address,

    manager: Option<Box<Manager>>,

    #[flynn(":ignore")]
    cache: HashMap<String, String>,

    salary: u64,

    level: i8,

    rating: f64,

    active: bool,

    skills: Vec<Skill>,

    r#type: String,
}

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn employee() -> Employee {
    Employee {
        id: 42,
        seq: 0,
        first_name: "Ada".to_string(),
        birth: Some(Utc.with_ymd_and_hms(1990, 12, 10, 8, 0, 0).unwrap()),
        address: Address {
            street: "Main Street 1".to_string(),
            city: "Darmstadt".to_string(),
            zip: Some("64283".to_string()),
        },
        manager: Some(Box::new(Manager {
            manager_name: "Grace".to_string(),
        })),
        cache: HashMap::new(),
        salary: 120_000,
        level: -3,
        rating: 4.5,
        active: true,
        skills: vec![],
        r#type: "engineer".to_string(),
    }
}

#[test]
fn sub_document_and_encoded_columns() {
    init_logging();

    let binding = Binding::<TestRecord>::new(["*"]).unwrap();
    assert_eq!(binding.field_names(), ["ID", "Name", "Sub", "Perm"]);
    assert_eq!(binding.key(), Some("ID"));
    assert_eq!(binding.roles().get("#key"), Some(&"ID"));
}

#[test]
fn employee_columns() {
    let binding = Binding::<Employee>::all().unwrap();
    assert_eq!(
        binding.field_names(),
        [
            "ID",
            "first_name",
            "Birth",
            "Street",
            "city",
            "zip",
            "manager_name",
            "salary",
            "level",
            "rating",
            "active",
            "type",
        ]
    );
    assert_eq!(binding.roles().get("#index"), Some(&"seq"));
    assert_eq!(binding.row_names()["skills"], ["Skill", "years"]);
}

#[test]
fn round_trip_through_holders() {
    init_logging();

    let binding = Binding::<Employee>::all().unwrap();
    let original = employee();
    let values = binding.extract(&original).unwrap();
    assert_eq!(values.len(), binding.len());

    let mut bound = binding.allocate().unwrap();
    bound.fill(values).unwrap();
    bound.shift().unwrap();

    assert_eq!(bound.into_instance(), original);
}

#[test]
fn nil_pointer_extracts_zero_record() {
    let binding = Binding::<Employee>::new(["manager_name", "ID"]).unwrap();
    let employee = Employee {
        id: 7,
        manager: None,
        ..employee()
    };

    let values = binding.extract(&employee).unwrap();
    assert_eq!(values, [Value::I64(7), Value::from("")]);
}

#[test]
fn absent_optional_scalar_is_null() {
    let binding = Binding::<Employee>::new(["zip", "birth"]).unwrap();
    let values = binding.extract(&Employee::default()).unwrap();
    assert_eq!(values, [Value::Null, Value::Null]);
}

#[test]
fn u64_max_shifts_without_error() {
    let binding = Binding::<Employee>::new(["salary"]).unwrap();
    let mut bound = binding.allocate().unwrap();

    bound.holders_mut()[0] = Holder::U64(Some("18446744073709551615".to_string()));
    bound.shift().unwrap();
    assert_eq!(bound.instance().salary, u64::MAX);
}

#[test]
fn null_string_shifts_to_empty() {
    let binding = Binding::<Employee>::new(["first_name"]).unwrap();
    let mut bound = binding.allocate().unwrap();

    bound.fill([Value::Null]).unwrap();
    bound.shift().unwrap();
    assert_eq!(bound.instance().first_name, "");
}

#[test]
fn nested_pointer_is_allocated_for_scan() {
    let binding = Binding::<Employee>::new(["manager_name"]).unwrap();
    let mut bound = binding.allocate().unwrap();
    assert_eq!(bound.instance().manager, Some(Box::default()));

    bound.fill([Value::from("Grace")]).unwrap();
    bound.shift().unwrap();
    assert_eq!(
        bound.into_instance().manager.unwrap().manager_name,
        "Grace"
    );
}

#[test]
fn selection_is_case_insensitive() {
    let upper = Binding::<Employee>::new(["First_Name", "CITY"]).unwrap();
    let lower = Binding::<Employee>::new(["first_name", "city"]).unwrap();
    assert_eq!(upper.field_names(), ["first_name", "city"]);
    assert_eq!(upper.field_names(), lower.field_names());
}

#[test]
fn empty_selection_is_a_no_op() {
    let binding = Binding::<Employee>::new([""]).unwrap();
    assert!(binding.field_names().is_empty());
    assert_eq!(binding.query_fields(), "");
    assert!(binding.extract(&employee()).unwrap().is_empty());

    let mut bound = binding.allocate().unwrap();
    bound.fill([]).unwrap();
    bound.shift().unwrap();
    assert_eq!(bound.into_instance(), Employee::default());
}

#[test]
fn sub_document_round_trip() {
    let sub = Sub {
        label: "alpha".to_string(),
        size: 12,
    };

    let mut parsed = Sub::default();
    parsed.parse_data(&sub.data()).unwrap();
    assert_eq!(parsed, sub);
}

#[test]
fn test_record_round_trip() {
    let binding = Binding::<TestRecord>::all().unwrap();
    let original = TestRecord {
        id: 1,
        name: "first".to_string(),
        sub: Some(Box::new(Sub {
            label: "blue".to_string(),
            size: 3,
        })),
        perm: Some(Box::new(Permission {
            read: "all".to_string(),
            write: "owner".to_string(),
        })),
    };

    let values = binding.extract(&original).unwrap();
    assert_eq!(values[2], Value::Bytes(b"blue|3".to_vec()));
    assert!(values[3].as_str().unwrap().contains("read: all"));

    let mut bound = binding.allocate().unwrap();
    bound.fill(values).unwrap();
    bound.shift().unwrap();
    assert_eq!(bound.into_instance(), original);
}

#[test]
fn absent_sub_document_and_encoding_keep_placeholders() {
    let binding = Binding::<TestRecord>::all().unwrap();
    let values = binding.extract(&TestRecord::default()).unwrap();

    assert_eq!(
        values,
        [
            Value::I64(0),
            Value::from(""),
            Value::Bytes(vec![]),
            Value::from(""),
        ]
    );
}

#[test]
fn malformed_sub_document_payload() {
    let binding = Binding::<TestRecord>::new(["sub"]).unwrap();
    let mut bound = binding.allocate().unwrap();

    bound.fill([Value::from("no separator")]).unwrap();
    let err = bound.shift().unwrap_err();
    assert!(err.is_decoding_failed());
    assert_eq!(
        err.to_string(),
        "failed to decode field `Sub` (column 0): missing separator"
    );
}

#[test]
fn rows_are_shifted_one_after_another() {
    let binding = Binding::<TestRecord>::new(["id", "name"]).unwrap();
    let mut bound = binding.allocate().unwrap();
    let mut records = vec![];

    for (id, name) in [(1, "one"), (2, "two"), (3, "three")] {
        bound.fill([Value::I64(id), Value::from(name)]).unwrap();
        bound.shift().unwrap();
        records.push(bound.take().unwrap());
    }

    let names: Vec<_> = records.iter().map(|r| (r.id, r.name.as_str())).collect();
    assert_eq!(names, [(1, "one"), (2, "two"), (3, "three")]);
}
