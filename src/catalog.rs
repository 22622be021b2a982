/// Image files shipped with the game. Each pair shares the prefix before `_`.
pub const BUILTIN_ASSETS: [&str; 24] = [
    "A_1.png", "A_2.png", "B_1.png", "B_2.png", "C_1.png", "C_2.png", "D_1.png", "D_2.png",
    "E_1.png", "E_2.png", "F_1.png", "F_2.png", "G_1.png", "G_2.png", "H_1.png", "H_2.png",
    "I_1.png", "I_2.png", "J_1.png", "J_2.png", "K_1.png", "K_2.png", "L_1.png", "L_2.png",
];

pub fn builtin_assets() -> Vec<String> {
    BUILTIN_ASSETS.iter().map(|name| name.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{AssetId, group_by_prefix};

    #[test]
    fn builtin_catalog_is_twelve_pairs() {
        let assets: Vec<AssetId> = BUILTIN_ASSETS.iter().map(|name| AssetId::new(*name)).collect();
        let grouped = group_by_prefix(&assets, '_');
        assert_eq!(grouped.valid_prefixes().len(), 12);
        assert_eq!(assets.len() % 2, 0);
    }
}
