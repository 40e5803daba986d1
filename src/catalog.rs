// catalog.rs

/// Descriptive details for a property's public page.
#[derive(Debug)]
pub struct PropertyDetails {
    pub id: &'static str,
    pub name: &'static str,
    pub location: &'static str,
    pub bedrooms: u8,
    pub bathrooms: u8,
    pub max_guests: u8,
    pub description: &'static str,
    pub amenities: &'static [&'static str],
    pub image: &'static str,
}

const AMENITIES: &[&str] = &[
    "High-Speed WiFi",
    "Smart TV",
    "Coffee Machine",
    "Air Conditioning",
];

pub const PROPERTIES: &[PropertyDetails] = &[
    PropertyDetails {
        id: "2B-N1",
        name: "2B N1 A - 29 Shoreditch Heights",
        location: "Shoreditch, London",
        bedrooms: 2,
        bathrooms: 1,
        max_guests: 4,
        description: "Modern and stylish 2-bedroom apartment in the heart of Shoreditch. \
            Perfect for business travelers or tourists wanting to explore East London. \
            Contemporary design, high-speed WiFi, and a short walk to Old Street station.",
        amenities: AMENITIES,
        image: "https://images.unsplash.com/photo-1522708323590-d24dbb6b0267?w=800",
    },
    PropertyDetails {
        id: "1B-W8",
        name: "1B W8 C - Kensington Gardens Flat",
        location: "Kensington, London",
        bedrooms: 1,
        bathrooms: 1,
        max_guests: 2,
        description: "Elegant 1-bedroom flat in upscale Kensington, close to Hyde Park and \
            world-class museums. Beautifully furnished, perfect for couples.",
        amenities: AMENITIES,
        image: "https://images.unsplash.com/photo-1502672260266-1c1ef2d93688?w=800",
    },
    PropertyDetails {
        id: "Studio-E2",
        name: "Studio E2 B - Bethnal Green Loft",
        location: "Bethnal Green, London",
        bedrooms: 1,
        bathrooms: 1,
        max_guests: 2,
        description: "Bright open-plan studio above a row of independent cafes, \
            ten minutes from Columbia Road flower market.",
        amenities: &["High-Speed WiFi", "Smart TV", "Coffee Machine"],
        image: "https://images.unsplash.com/photo-1505691938895-1758d7feb511?w=800",
    },
];

pub fn find_property(id: &str) -> Option<&'static PropertyDetails> {
    PROPERTIES.iter().find(|p| p.id == id)
}
