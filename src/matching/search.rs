use crate::filters::Range;
use crate::models::{PostalCode, Property};

/// Validated search filters
#[derive(Debug, Clone, PartialEq)]
pub struct SearchCriteria {
    pub postal_code: PostalCode,
    pub price: Range<i64>,
    pub rooms: Range<i32>,
    pub square_meters: Range<i32>,
}

impl SearchCriteria {
    pub fn accepts(&self, property: &Property) -> bool {
        property.postal_code == self.postal_code
            && self.price.contains(&property.price)
            && self.rooms.contains(&property.number_of_rooms)
            && self.square_meters.contains(&property.square_meters)
    }
}

/// Every property passing `criteria`, in input order
pub fn search(criteria: &SearchCriteria, properties: &[Property]) -> Vec<Property> {
    properties
        .iter()
        .filter(|property| criteria.accepts(property))
        .cloned()
        .collect()
}
