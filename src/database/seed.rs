//! Initial catalog inserted when the products table is created empty.

pub struct SeedProduct {
    pub name: &'static str,
    pub slug: &'static str,
    pub category: &'static str,
    pub description: &'static str,
    pub image_url: &'static str,
    pub features: &'static [&'static str],
    pub packaging_options: &'static str,
    pub moq: &'static str,
    pub countries_served: &'static [&'static str],
    pub shelf_life: &'static str,
    pub grades: &'static str,
    pub display_order: i32,
}

pub const SEED_PRODUCTS: &[SeedProduct] = &[
    SeedProduct {
        name: "Premium Red Onions",
        slug: "red-onions",
        category: "Agricultural Products",
        description: "Fresh, high-quality red onions sourced from the finest farms in India. Our red onions are known for their rich flavor, firm texture, and extended shelf life.",
        image_url: "https://images.unsplash.com/photo-1618512496248-a07fe83aa8cb?auto=format&fit=crop&q=80&w=800",
        features: &[
            "Size: 40mm to 80mm diameter",
            "Color: Deep red to purple",
            "Moisture content: Below 85%",
            "Free from sprouting and diseases",
            "Pungency: Medium to high",
            "Storage: Cool, dry conditions",
        ],
        packaging_options: "10kg, 20kg, 25kg mesh bags or as per buyer requirement",
        moq: "1 container (20-25 MT)",
        countries_served: &["UAE", "Malaysia", "Bangladesh", "Sri Lanka", "Singapore"],
        shelf_life: "2-3 months under proper storage",
        grades: "A Grade, B Grade available",
        display_order: 1,
    },
    SeedProduct {
        name: "Organic Jaggery (Gur)",
        slug: "jaggery",
        category: "Agricultural Products",
        description: "Pure, organic jaggery made from sugarcane juice without any chemicals. Rich in minerals and iron, our jaggery is a healthy alternative to refined sugar.",
        image_url: "/src/images/brown-refined-gud-jaggery.jpg",
        features: &[
            "Made from 100% pure sugarcane juice",
            "No chemicals or additives",
            "Rich in iron and minerals",
            "Natural golden to dark brown color",
            "Traditional production methods",
            "Unrefined and chemical-free",
        ],
        packaging_options: "500g, 1kg blocks; 25kg bulk packs",
        moq: "500kg",
        countries_served: &["USA", "UK", "Canada", "Australia", "UAE"],
        shelf_life: "12 months",
        grades: "Premium Grade, Standard Grade",
        display_order: 2,
    },
    SeedProduct {
        name: "Fresh Green Chillies",
        slug: "green-chillies",
        category: "Agricultural Products",
        description: "Farm-fresh green chillies with optimal heat and flavor. Carefully selected and packed to maintain freshness during export.",
        image_url: "/src/images/Green-Chillis.jpg",
        features: &[
            "Length: 8-12 cm",
            "Fresh green color",
            "Medium to high heat level",
            "Crisp texture",
            "Free from blemishes",
            "Properly graded and sorted",
        ],
        packaging_options: "5kg corrugated boxes with ventilation",
        moq: "1 ton",
        countries_served: &["UK", "UAE", "Malaysia", "Singapore"],
        shelf_life: "2-3 weeks under cold storage",
        grades: "Export Grade A",
        display_order: 3,
    },
    SeedProduct {
        name: "Quality Groundnuts",
        slug: "groundnuts",
        category: "Agricultural Products",
        description: "Premium quality groundnuts (peanuts) available in shell and shelled forms. Rich in protein and healthy fats.",
        image_url: "https://images.unsplash.com/photo-1560493676-04071c5f467b?auto=format&fit=crop&q=80&w=800",
        features: &[
            "Bold and Java varieties",
            "Natural color and taste",
            "Free from aflatoxin",
            "Uniform size grading",
            "High oil content",
            "Quality tested and certified",
        ],
        packaging_options: "25kg, 50kg PP bags; vacuum packs for kernels",
        moq: "5 tons",
        countries_served: &["Vietnam", "Indonesia", "Philippines", "Middle East"],
        shelf_life: "6-8 months",
        grades: "Bold, Java, TJ varieties",
        display_order: 4,
    },
    SeedProduct {
        name: "Indian Handicrafts",
        slug: "handicrafts",
        category: "Handicrafts",
        description: "Authentic handmade Indian handicrafts including textiles, pottery, metalwork, and wooden artifacts. Each piece reflects traditional Indian craftsmanship.",
        image_url: "https://images.unsplash.com/photo-1610701596007-11502861dcfa?auto=format&fit=crop&q=80&w=800",
        features: &[
            "Handmade by skilled artisans",
            "Traditional designs and patterns",
            "Eco-friendly materials",
            "Variety: textiles, pottery, metalwork",
            "Unique cultural heritage",
            "Fair trade certified",
        ],
        packaging_options: "Individual protective packaging, custom boxes available",
        moq: "Varies by product type",
        countries_served: &["USA", "UK", "Germany", "France", "Australia", "Japan"],
        shelf_life: "N/A (durable goods)",
        grades: "Premium handcrafted quality",
        display_order: 5,
    },
];
