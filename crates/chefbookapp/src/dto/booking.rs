use super::{read_value, write_value, Dto, FlatMap};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingDto {
    pub id: Option<String>,
    pub customer_id: Option<String>,
    pub date: Option<String>,
}

impl Dto for BookingDto {
    const FIELDS: &'static [&'static str] = &["id", "customer_id", "date"];

    fn from_flat_map(map: &FlatMap) -> Self {
        Self {
            id: read_value(map, "id"),
            customer_id: read_value(map, "customer_id"),
            date: read_value(map, "date"),
        }
    }

    fn to_flat_map(&self) -> FlatMap {
        let mut map = FlatMap::new();
        write_value(&mut map, "id", &self.id);
        write_value(&mut map, "customer_id", &self.customer_id);
        write_value(&mut map, "date", &self.date);
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        let dto = BookingDto {
            id: Some("b1".into()),
            customer_id: Some("c1".into()),
            date: Some("14.10.2024 19:30".into()),
        };
        assert_eq!(BookingDto::from_flat_map(&dto.to_flat_map()), dto);
    }

    #[test]
    fn test_empty_map_is_all_absent() {
        assert_eq!(BookingDto::from_flat_map(&FlatMap::new()), BookingDto::default());
    }
}
