/*
[INPUT]:  Shared HTTP transport
[OUTPUT]: One typed service per Biteship resource
[POS]:    Service layer - resource facades over the transport
[UPDATE]: When adding resources or endpoints
*/

use std::borrow::Cow;

pub mod couriers;
pub mod draft_orders;
pub mod locations;
pub mod maps;
pub mod orders;
pub mod rates;
pub mod tracking;

pub use couriers::CouriersService;
pub use draft_orders::DraftOrdersService;
pub use locations::LocationsService;
pub use maps::MapsService;
pub use orders::OrdersService;
pub use rates::RatesService;
pub use tracking::TrackingService;

/// Percent-encode a caller supplied id so it stays one path segment
pub(crate) fn segment(value: &str) -> Cow<'_, str> {
    urlencoding::encode(value)
}


#[cfg(test)]
mod tests {
    use super::segment;

    #[test]
    fn test_segment_encodes_separators() {
        assert_eq!(segment("abc"), "abc");
        assert_eq!(segment("a/b?c"), "a%2Fb%3Fc");
    }
}
