//! Test utilities for sqlvalue-core

#[cfg(test)]
pub mod test {
    use crate::SqlValue;
    use bytes::Bytes;
    use ordered_float::OrderedFloat;
    use rand::Rng;

    /// A row touching every wire shape
    pub fn sample_row() -> Vec<SqlValue> {
        vec![
            SqlValue::Null,
            SqlValue::Boolean(true),
            SqlValue::Integer(1000000000),
            SqlValue::Float(OrderedFloat(2.625)),
            SqlValue::Text("test string".to_string()),
            SqlValue::Blob(Bytes::from_static(&[0x01, 0x02, 0x03])),
            SqlValue::Array(vec![SqlValue::Integer(1), SqlValue::Integer(2)]),
        ]
    }

    /// Generate a random scalar value (never null, never a container)
    pub fn random_scalar(rng: &mut impl Rng) -> SqlValue {
        match rng.random_range(0..4) {
            0 => SqlValue::Boolean(rng.random()),
            1 => SqlValue::Integer(rng.random()),
            // Finite mantissa-range floats; NaN would break equality checks
            2 => SqlValue::Float(OrderedFloat(rng.random_range(-1.0e12..1.0e12))),
            _ => {
                let len = rng.random_range(0..24);
                let text: String = (0..len)
                    .map(|_| rng.random_range('a'..='z'))
                    .collect();
                SqlValue::Text(text)
            }
        }
    }

    /// Generate a random value, including blobs, arrays, and nulls
    pub fn random_value(rng: &mut impl Rng, depth: u32) -> SqlValue {
        if depth > 0 && rng.random_range(0..4) == 0 {
            let len = rng.random_range(0..5);
            let items = (0..len).map(|_| random_value(rng, depth - 1)).collect();
            return SqlValue::Array(items);
        }
        match rng.random_range(0..6) {
            0 => SqlValue::Null,
            1 => {
                let len = rng.random_range(0..16);
                let payload: Vec<u8> = (0..len).map(|_| rng.random()).collect();
                SqlValue::Blob(Bytes::from(payload))
            }
            _ => random_scalar(rng),
        }
    }
}

#[cfg(test)]
mod test_utils_tests {
    use super::test::*;
    use crate::SqlValue;

    #[test]
    fn test_sample_row_shapes() {
        let row = sample_row();
        assert_eq!(row.len(), 7);
        assert!(row[0].is_null());
        assert_eq!(row[6].type_name(), "Array");
    }

    #[test]
    fn test_random_scalar_is_scalar() {
        let mut rng = rand::rng();
        for _ in 0..100 {
            let v = random_scalar(&mut rng);
            assert!(matches!(
                v,
                SqlValue::Boolean(_)
                    | SqlValue::Integer(_)
                    | SqlValue::Float(_)
                    | SqlValue::Text(_)
            ));
        }
    }

    #[test]
    fn test_random_value_respects_depth() {
        fn depth_of(value: &SqlValue) -> u32 {
            match value {
                SqlValue::Array(items) => 1 + items.iter().map(depth_of).max().unwrap_or(0),
                _ => 0,
            }
        }

        let mut rng = rand::rng();
        for _ in 0..100 {
            let v = random_value(&mut rng, 2);
            assert!(depth_of(&v) <= 2);
        }
    }
}
