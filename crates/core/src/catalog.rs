//! Fixed property listings and the demo photos offered for each.

use crate::types::{DemoImage, PropertyRecord};

/// Image ids starting with this prefix are demo placeholders: the caller
/// supplies the actual reference instead of it being looked up.
pub const DEMO_PLACEHOLDER_PREFIX: &str = "demo-";

/// URL prefix under which demo photos are served.
pub const DEMO_URL_PREFIX: &str = "/static/demo-images/";

/// The only filenames the resolver will ever read from the demo directory.
pub const DEMO_ASSET_FILENAMES: &[&str] = &[
    "demo1.jpg",
    "demo2.jpg",
    "demo3.jpeg",
    "demo4.jpeg",
    "demo5.jpg",
    "demo6.jpg",
];

const KOMINKA_IMAGES: &[DemoImage] = &[
    DemoImage {
        id: "demo1",
        name: "台所",
        url: "/static/demo-images/demo1.jpg",
        description: "Kitchen",
    },
    DemoImage {
        id: "demo2",
        name: "外観",
        url: "/static/demo-images/demo2.jpg",
        description: "Exterior view",
    },
    DemoImage {
        id: "demo3",
        name: "廊下",
        url: "/static/demo-images/demo3.jpeg",
        description: "Corridor",
    },
];

const IKKODATE_IMAGES: &[DemoImage] = &[
    DemoImage {
        id: "demo4",
        name: "和室",
        url: "/static/demo-images/demo4.jpeg",
        description: "Japanese-style room",
    },
    DemoImage {
        id: "demo5",
        name: "空き部屋",
        url: "/static/demo-images/demo5.jpg",
        description: "Empty room",
    },
    DemoImage {
        id: "demo6",
        name: "リビング",
        url: "/static/demo-images/demo6.jpg",
        description: "Living room",
    },
];

/// Demo photos for a property: `house1` is the kominka set, `house2` the
/// ikkodate set. Anything else has none.
pub fn demo_images_for(house_type: &str) -> Option<&'static [DemoImage]> {
    match house_type {
        "house1" => Some(KOMINKA_IMAGES),
        "house2" => Some(IKKODATE_IMAGES),
        _ => None,
    }
}

pub fn is_demo_placeholder(image_id: &str) -> bool {
    image_id.starts_with(DEMO_PLACEHOLDER_PREFIX)
}

/// The listings every process starts with, in display order.
pub fn seed_properties() -> Vec<PropertyRecord> {
    vec![
        PropertyRecord {
            id: "house1".to_string(),
            name: "世田谷区 - 古民家".to_string(),
            address: "東京都世田谷区".to_string(),
            price: "3,800万円".to_string(),
            area: "180㎡".to_string(),
            age: "築80年".to_string(),
            description: "伝統的な日本家屋。広い庭付き。リノベーション向き。".to_string(),
            images: Vec::new(),
        },
        PropertyRecord {
            id: "house2".to_string(),
            name: "杉並区 - 一戸建て".to_string(),
            address: "東京都杉並区".to_string(),
            price: "5,200万円".to_string(),
            area: "120㎡".to_string(),
            age: "築50年".to_string(),
            description: "静かな住宅街の一軒家。駅から徒歩15分。".to_string(),
            images: Vec::new(),
        },
    ]
}
