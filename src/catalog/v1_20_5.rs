use super::{input, map_decoration};
use crate::model::SourceAtlas;

/// Map icon names in sheet order.
const MAP_ICONS: [&str; 34] = [
    "player",
    "frame",
    "red_marker",
    "blue_marker",
    "target_x",
    "target_point",
    "player_off_map",
    "player_off_limits",
    "woodland_mansion",
    "ocean_monument",
    "white_banner",
    "orange_banner",
    "magenta_banner",
    "light_blue_banner",
    "yellow_banner",
    "lime_banner",
    "pink_banner",
    "gray_banner",
    "light_gray_banner",
    "cyan_banner",
    "purple_banner",
    "blue_banner",
    "brown_banner",
    "green_banner",
    "red_banner",
    "black_banner",
    "red_x",
    "desert_village",
    "plains_village",
    "savanna_village",
    "snowy_village",
    "taiga_village",
    "jungle_temple",
    "swamp_hut",
];

pub(super) fn atlases() -> Vec<SourceAtlas> {
    let icons = MAP_ICONS
        .iter()
        .zip(0u32..)
        .map(|(name, index)| map_decoration(name, index))
        .collect();

    vec![input("map/map_icons.png", icons)]
}
