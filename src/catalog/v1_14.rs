use super::{
    TEXTURES, b256, effect, explosion, input, painting, particle, particle_offset, particle_row,
    particle_sized, sweep,
};
use crate::model::{ExtractionTarget, SourceAtlas};

pub(super) fn atlases() -> Vec<SourceAtlas> {
    vec![
        input("painting/paintings_kristoffer_zetterstrand.png", paintings()),
        input("gui/container/inventory.png", effects()),
        input("particle/particles.png", particles()),
        input("entity/explosion.png", (0..16).map(explosion).collect()),
        input(
            "entity/sweep.png",
            vec![
                sweep(0, 0, 0),
                sweep(1, 1, 0),
                sweep(2, 2, 0),
                sweep(3, 3, 0),
                sweep(4, 0, 1),
                sweep(5, 1, 1),
                sweep(6, 2, 1),
                sweep(7, 3, 1),
            ],
        ),
    ]
}

fn paintings() -> Vec<ExtractionTarget> {
    vec![
        painting("back", 15, 0, 1, 1),
        painting("kebab", 0, 0, 1, 1),
        painting("aztec", 1, 0, 1, 1),
        painting("alban", 2, 0, 1, 1),
        painting("aztec2", 3, 0, 1, 1),
        painting("bomb", 4, 0, 1, 1),
        painting("plant", 5, 0, 1, 1),
        painting("wasteland", 6, 0, 1, 1),
        painting("pool", 0, 2, 2, 1),
        painting("courbet", 2, 2, 2, 1),
        painting("sea", 4, 2, 2, 1),
        painting("sunset", 6, 2, 2, 1),
        painting("creebet", 8, 2, 2, 1),
        painting("wanderer", 0, 4, 1, 2),
        painting("graham", 1, 4, 1, 2),
        painting("match", 0, 8, 2, 2),
        painting("bust", 2, 8, 2, 2),
        painting("stage", 4, 8, 2, 2),
        painting("void", 6, 8, 2, 2),
        painting("skull_and_roses", 8, 8, 2, 2),
        painting("wither", 10, 8, 2, 2),
        painting("fighters", 0, 6, 4, 2),
        painting("pointer", 0, 12, 4, 4),
        painting("pigscene", 4, 12, 4, 4),
        painting("burning_skull", 8, 12, 4, 4),
        painting("skeleton", 12, 4, 4, 3),
        painting("donkey_kong", 12, 7, 4, 3),
    ]
}

fn effects() -> Vec<ExtractionTarget> {
    vec![
        effect("speed", 0, 0),
        effect("slowness", 1, 0),
        effect("haste", 2, 0),
        effect("mining_fatigue", 3, 0),
        effect("strength", 4, 0),
        effect("jump_boost", 2, 1),
        effect("nausea", 3, 1),
        effect("regeneration", 7, 0),
        effect("resistance", 6, 1),
        effect("fire_resistance", 7, 1),
        effect("water_breathing", 0, 2),
        effect("invisibility", 0, 1),
        effect("blindness", 5, 1),
        effect("night_vision", 4, 1),
        effect("hunger", 1, 1),
        effect("weakness", 5, 0),
        effect("poison", 6, 0),
        effect("wither", 1, 2),
        effect("health_boost", 7, 2),
        effect("absorption", 2, 2),
        effect("glowing", 4, 2),
        effect("levitation", 3, 2),
        effect("luck", 5, 2),
        effect("unluck", 6, 2),
        effect("slow_falling", 8, 0),
        effect("conduit_power", 9, 0),
        effect("dolphins_grace", 10, 0),
    ]
}

/// Standard Galactic glyphs: `a` starts at column 1 of row 14 and the
/// alphabet wraps onto row 15.
fn sga_glyphs() -> Vec<ExtractionTarget> {
    ('a'..='z')
        .zip(1u32..)
        .map(|(letter, cell)| particle(&format!("sga_{letter}"), cell % 16, 14 + cell / 16))
        .collect()
}

fn particles() -> Vec<ExtractionTarget> {
    let mut targets = particle_row("generic", 0, 8);

    targets.extend([
        particle("splash_0", 3, 1),
        particle("splash_1", 4, 1),
        particle("splash_2", 5, 1),
        particle("splash_3", 6, 1),
    ]);

    targets.extend(sga_glyphs());

    targets.extend(particle_row("effect", 8, 8));
    targets.extend(particle_row("glitter", 11, 8));
    targets.extend(particle_row("spark", 10, 8));
    targets.extend(particle_row("spell", 9, 8));

    // two-cell bubble pops, shifted three pixels down
    targets.extend(
        (0..5).map(|i| particle_offset(&format!("bubble_pop_{i}"), i * 2, 16, 0, 3, 2, 2)),
    );

    targets.extend([
        particle_sized("flash", 4, 2, 4, 4),
        particle("nautilus", 0, 13),
        particle("note", 0, 4),
        particle("angry", 1, 5),
        particle("bubble", 0, 2),
        particle("damage", 3, 4),
        particle("flame", 0, 3),
        particle("lava", 1, 3),
        particle("heart", 0, 5),
        particle("glint", 2, 5),
        particle("enchanted_hit", 2, 4),
        particle("critical_hit", 1, 4),
        particle("drip_hang", 0, 7),
        particle("drip_fall", 1, 7),
        particle("drip_land", 2, 7),
        ExtractionTarget::new(format!("{TEXTURES}/entity/fishing_hook.png"), b256(8, 16, 8, 8)),
    ]);

    targets
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sga_glyph_positions() {
        let glyphs = sga_glyphs();
        assert_eq!(glyphs.len(), 26);

        let find = |letter: &str| {
            glyphs
                .iter()
                .find(|t| t.path.ends_with(&format!("sga_{letter}.png")))
                .map(|t| (t.region.x / 8, t.region.y / 8))
        };
        assert_eq!(find("a"), Some((1, 14)));
        assert_eq!(find("o"), Some((15, 14)));
        assert_eq!(find("p"), Some((0, 15)));
        assert_eq!(find("z"), Some((10, 15)));
    }

    #[test]
    fn test_bubble_pop_offset() {
        let pops: Vec<_> = particles()
            .into_iter()
            .filter(|t| t.path.contains("bubble_pop_"))
            .collect();
        assert_eq!(pops.len(), 5);
        assert_eq!(pops[1].region, b256(16, 131, 16, 16));
    }

    #[test]
    fn test_counts() {
        assert_eq!(paintings().len(), 27);
        assert_eq!(effects().len(), 27);
        // 8 generic + 4 splash + 26 sga + 4x8 rows + 5 bubble pops + 16 singles
        assert_eq!(particles().len(), 91);
    }
}
