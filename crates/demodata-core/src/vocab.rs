//! Fixed vocabularies the generators draw from.
//!
//! These lists are the only "configuration" of the engine and are compiled-in
//! constants by design. The generators select entries by index from the
//! seeded draw stream, so the lists must never be reordered between releases
//! of the same deployment if golden outputs are being compared.

/// Business names for synthetic customers. Collisions across generated
/// records are allowed; uniqueness is not guaranteed or required.
pub const BUSINESS_NAMES: &[&str] = &[
    "Abarrotes El Centro",
    "Abarrotes La Esperanza",
    "Bodega San Miguel",
    "Comercial Buenavista",
    "Distribuidora del Valle",
    "Farmacia La Salud",
    "Ferreteria El Martillo",
    "Fruteria Don Pancho",
    "Mercado Las Flores",
    "Minisuper La Rapida",
    "Panaderia El Trigal",
    "Papeleria El Lapiz",
    "Refaccionaria Torres",
    "Super Del Barrio",
    "Tienda Dona Lupita",
    "Tienda El Ahorro",
    "Tlapaleria Central",
    "Ultramarinos Garcia",
    "Verduleria La Huerta",
    "Viveres Monterrey",
];

/// Product categories.
pub const CATEGORIES: &[&str] = &[
    "Beverages",
    "Snacks",
    "Dairy",
    "Bakery",
    "Cleaning",
    "Personal Care",
    "Canned Goods",
    "Candy",
];

/// Product brands.
pub const BRANDS: &[&str] = &[
    "Nortena",
    "Valle Real",
    "La Cumbre",
    "Frescor",
    "DulceMax",
    "Casa Blanca",
    "El Molino",
    "Riviera",
];

/// Name suffixes used when composing product display names.
pub const PRODUCT_NOUNS: &[&str] = &[
    "Classic",
    "Premium",
    "Family Pack",
    "Mini",
    "Extra",
    "Original",
    "Zero",
    "Max",
    "Light",
    "XL",
];

/// Storage locations for inventory items.
pub const LOCATIONS: &[&str] = &[
    "Warehouse A",
    "Warehouse B",
    "Cold Storage",
    "Front Store",
    "Backroom",
];

/// Reasons attached to customers whose churn risk exceeds 60.
pub const CHURN_REASONS: &[&str] = &[
    "No orders in over a month",
    "Switched to a competitor",
    "Price sensitivity",
    "Unresolved service complaint",
    "Seasonal business slowdown",
];
