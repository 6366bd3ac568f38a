use light_bitfield::{BitField, BitFieldError, Value};

enum Subscript {
    Index(Value),
    Range(i64, i64),
}

fn subscript(field: &BitField, arg: Subscript) -> Result<Value, BitFieldError> {
    match arg {
        Subscript::Index(index) => Ok(field.get(&index)?.map(i64::from).into()),
        Subscript::Range(start, end) => Ok(match field.get_range(start..=end) {
            Some(bits) => Value::Str(
                bits.iter()
                    .map(|bit| bit.map_or('-', |bit| if bit == 1 { '1' } else { '0' }))
                    .collect(),
            ),
            None => Value::Nil,
        }),
    }
}

fn main() {
    let mut field = BitField::try_new(Value::Int(6)).unwrap();
    field.set(Value::Int(0), Value::Int(3)).unwrap();

    assert_eq!(subscript(&field, Subscript::Index(Value::Int(0))), Ok(Value::Int(1)));
    assert_eq!(subscript(&field, Subscript::Index(Value::Int(-1))), Ok(Value::Nil));
    assert_eq!(subscript(&field, Subscript::Range(4, 7)), Ok(Value::Str("00--".into())));
    assert_eq!(subscript(&field, Subscript::Range(9, 10)), Ok(Value::Nil));

    let err = subscript(&field, Subscript::Index(Value::Str("0".into()))).unwrap_err();
    assert_eq!(err.to_string(), "wrong argument type String (expected Integer)");

    let err = field.set(6, 1).unwrap_err();
    assert_eq!(err.to_string(), "BitField out of range with value 6.");

    let err = field
        .flip_with_args(&[Value::Int(1), Value::Int(2)])
        .unwrap_err();
    assert_eq!(err, BitFieldError::Arity { given: 2 });
}
