use points::Category;

/// Display style for one density tier.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TierStyle {
    pub tier: Category,
    pub label: &'static str,
    /// RGBA, 0..=1 per channel.
    pub color: [f32; 4],
}

/// Label and color for a density tier (green → yellow → orange → red).
pub const fn tier_style(tier: Category) -> TierStyle {
    match tier {
        Category::Low => TierStyle {
            tier,
            label: "Low",
            color: [0.133, 0.773, 0.369, 1.0],
        },
        Category::Medium => TierStyle {
            tier,
            label: "Medium",
            color: [0.918, 0.702, 0.031, 1.0],
        },
        Category::High => TierStyle {
            tier,
            label: "High",
            color: [0.976, 0.451, 0.086, 1.0],
        },
        Category::VeryHigh => TierStyle {
            tier,
            label: "Very High",
            color: [0.937, 0.267, 0.267, 1.0],
        },
    }
}

/// All tier styles in ascending tier order, for a legend widget.
pub fn legend() -> [TierStyle; 4] {
    [
        tier_style(Category::Low),
        tier_style(Category::Medium),
        tier_style(Category::High),
        tier_style(Category::VeryHigh),
    ]
}
