use huetone::{
    Argb, ContrastCurve, CorePalette, DynamicSchemeBuilder, Hct, MaterialDynamicColors,
    TemperatureCache, Variant, blend,
};
use tracing::info;

const VARIANTS: [Variant; 9] = [
    Variant::Monochrome,
    Variant::Neutral,
    Variant::TonalSpot,
    Variant::Vibrant,
    Variant::Expressive,
    Variant::Fidelity,
    Variant::Content,
    Variant::Rainbow,
    Variant::FruitSalad,
];

fn parse_seed(arg: &str) -> Option<Argb> {
    let digits = arg.trim_start_matches("0x").trim_start_matches('#');
    u32::from_str_radix(digits, 16).ok().map(|rgb| rgb | 0xff00_0000)
}

fn print_scheme(seed: Hct, variant: Variant, is_dark: bool, contrast_level: f64) {
    let scheme = DynamicSchemeBuilder::default()
        .source_color_hct(seed)
        .variant(variant)
        .is_dark(is_dark)
        .contrast_level(contrast_level)
        .build();
    let colors = MaterialDynamicColors::new();
    let mode = if is_dark { "dark" } else { "light" };
    println!("{variant:?} ({mode}, contrast {contrast_level:+.1})");
    let roles: [(&str, huetone::DynamicColor); 8] = [
        ("primary", colors.primary()),
        ("on_primary", colors.on_primary()),
        ("primary_container", colors.primary_container()),
        ("secondary", colors.secondary()),
        ("tertiary", colors.tertiary()),
        ("surface", colors.surface()),
        ("on_surface", colors.on_surface()),
        ("outline", colors.outline()),
    ];
    for (name, role) in roles {
        println!("  {name:<18} #{:06x}", role.get_argb(&scheme) & 0x00ff_ffff);
    }
}

fn main() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| tracing_subscriber::EnvFilter::try_new("info,huetone=debug"))
        .expect("default filter directive must parse");
    tracing_subscriber::fmt()
        .pretty()
        .with_env_filter(filter)
        .init();

    let seed = std::env::args()
        .nth(1)
        .as_deref()
        .and_then(parse_seed)
        .unwrap_or(0xff0000ff);
    let seed_hct = Hct::from_argb(seed);
    info!(
        "Seed #{:06x}: hue {:.1}, chroma {:.1}, tone {:.1}",
        seed & 0x00ff_ffff,
        seed_hct.hue(),
        seed_hct.chroma(),
        seed_hct.tone()
    );

    for variant in VARIANTS {
        print_scheme(seed_hct, variant, false, 0.0);
    }
    println!();
    println!("Contrast sweep (TonalSpot, dark):");
    let body_text = ContrastCurve::new(3.0, 4.5, 7.0, 11.0);
    for contrast_level in [-1.0, -0.5, 0.0, 0.5, 1.0] {
        println!(
            "  body text target ratio {:.2}",
            body_text.get(contrast_level)
        );
        print_scheme(seed_hct, Variant::TonalSpot, true, contrast_level);
    }

    let palette = CorePalette::of(seed);
    println!();
    println!("Primary tonal palette:");
    for tone in [0.0, 10.0, 20.0, 30.0, 40.0, 50.0, 60.0, 70.0, 80.0, 90.0, 95.0, 99.0, 100.0] {
        println!(
            "  T{tone:<5} #{:06x}",
            palette.primary().tone(tone) & 0x00ff_ffff
        );
    }

    let cache = TemperatureCache::new(seed_hct);
    println!();
    println!(
        "Complement #{:06x}",
        cache.complement().to_argb() & 0x00ff_ffff
    );
    for (i, analog) in cache.analogous_colors().iter().enumerate() {
        println!("Analogous {i} #{:06x}", analog.to_argb() & 0x00ff_ffff);
    }

    let harmonized = blend::harmonize(0xffffff00, seed);
    println!();
    println!("Yellow harmonized toward the seed: #{:06x}", harmonized & 0x00ff_ffff);
}
