use approx::assert_relative_eq;
use partgen::{
    apply_material, apply_overlay, generate, GenerateError, MaterialChoice, ModelType,
    OverlayKind, ParameterSet, Role, Shape, SimulationOverlay,
};
use std::f64::consts::TAU;

fn named<'a>(assembly: &'a partgen::MeshAssembly, prefix: &str) -> Vec<&'a partgen::Primitive> {
    assembly
        .primitives()
        .iter()
        .filter(|p| p.name.starts_with(prefix))
        .collect()
}

#[test]
fn default_gear_has_twenty_eight_primitives() {
    let gear = generate(ModelType::SpurGear, &ParameterSet::new()).unwrap();
    assert_eq!(gear.primitive_count(), 28);
    assert_eq!(gear.count_by_role(Role::Body), 1);
    assert_eq!(gear.count_by_role(Role::Feature), 20);
    assert_eq!(gear.count_by_role(Role::Hole), 7);
    assert_eq!(gear.body().unwrap().radial_segments(), Some(40));
}

#[test]
fn gear_teeth_are_evenly_spaced() {
    let params = ParameterSet::new().with("teeth", 9);
    let gear = generate(ModelType::SpurGear, &params).unwrap();
    let teeth = named(&gear, "tooth-");
    assert_eq!(teeth.len(), 9);
    for (i, tooth) in teeth.iter().enumerate() {
        let angle = TAU * i as f64 / 9.0;
        assert_relative_eq!(tooth.rotation.y, angle, epsilon = 1e-12);
        assert_relative_eq!(tooth.position.x, 1.2 * angle.cos(), epsilon = 1e-12);
        assert_relative_eq!(tooth.position.z, 1.2 * angle.sin(), epsilon = 1e-12);
    }
    // Few teeth still get the minimum body resolution
    assert_eq!(gear.body().unwrap().radial_segments(), Some(24));
}

#[test]
fn gear_without_holes() {
    let params = ParameterSet::new().with("showHoles", false);
    let gear = generate(ModelType::SpurGear, &params).unwrap();
    assert_eq!(gear.primitive_count(), 22);
    assert_eq!(gear.count_by_role(Role::Hole), 1);
}

#[test]
fn default_heat_sink_layout() {
    let sink = generate(ModelType::HeatSink, &ParameterSet::new()).unwrap();
    assert_eq!(sink.primitive_count(), 13);

    let fins = named(&sink, "fin-");
    assert_eq!(fins.len(), 12);
    let spacing = 36.0 / 13.0;
    assert_relative_eq!(spacing, 2.769, epsilon = 1e-3);
    assert_relative_eq!(fins[0].position.x, -30.0 + spacing + 1.0, epsilon = 1e-9);
    for pair in fins.windows(2) {
        assert_relative_eq!(pair[1].position.x - pair[0].position.x, spacing + 2.0, epsilon = 1e-9);
    }
    assert_relative_eq!(fins[0].position.y, 2.5 + 7.5, epsilon = 1e-12);
}

#[test]
fn overlapping_fins_are_clamped() {
    let params = ParameterSet::new().with("width", 20.0).with("finCount", 40);
    let sink = generate(ModelType::HeatSink, &params).unwrap();
    let fins = named(&sink, "fin-");
    // Fins are 2/3 mm thick at 20 mm width; 29 fins leave a positive gap
    assert_eq!(fins.len(), 29);
    let last = fins.last().unwrap();
    if let Shape::Box { width, .. } = last.shape {
        assert!(last.position.x + width / 2.0 < 10.0);
    } else {
        panic!("fin should be a box");
    }
}

#[test]
fn huge_fin_count_clamps_instead_of_failing() {
    let params = ParameterSet::new().with("finCount", 20_000);
    let sink = generate(ModelType::HeatSink, &params).unwrap();
    assert_eq!(named(&sink, "fin-").len(), 29);
    assert_eq!(sink.primitive_count(), 30);
}

#[test]
fn bracket_with_three_holes_uses_triangle() {
    let params = ParameterSet::new().with("holeCount", 3);
    let bracket = generate(ModelType::MountingBracket, &params).unwrap();
    assert_eq!(bracket.primitive_count(), 4);

    let holes: Vec<_> = bracket.root().with_role(Role::Hole).collect();
    let expected = [(0.0, 12.0), (-15.0, -6.0), (15.0, -6.0)];
    for (hole, (x, y)) in holes.iter().zip(expected) {
        assert_relative_eq!(hole.position.x, x, epsilon = 1e-9);
        assert_relative_eq!(hole.position.y, y, epsilon = 1e-9);
        assert_eq!(hole.position.z, 0.0);
        assert_relative_eq!(hole.rotation.x, std::f64::consts::FRAC_PI_2);
    }
}

#[test]
fn coupling_bolt_circle() {
    let coupling = generate(ModelType::FlangedCoupling, &ParameterSet::new()).unwrap();
    let bolts = named(&coupling, "bolt-hole-");
    assert_eq!(bolts.len(), 6);
    for bolt in bolts {
        let r = (bolt.position.x.powi(2) + bolt.position.z.powi(2)).sqrt();
        assert_relative_eq!(r, 15.0, epsilon = 1e-9);
    }
}

#[test]
fn gearbox_composes_two_gears() {
    let gearbox = generate(ModelType::GearboxAssembly, &ParameterSet::new()).unwrap();
    let subs = gearbox.sub_assemblies();
    assert_eq!(subs.len(), 2);
    assert_eq!(subs[0].group.with_role(Role::Feature).count(), 20);
    assert_eq!(subs[1].group.with_role(Role::Feature).count(), 30);
    // Pitch circles touch
    let gap = subs[1].position.x - subs[0].position.x;
    assert_relative_eq!(gap, 15.0 + 22.5, epsilon = 1e-9);
    assert!(gearbox.root().has_single_bodies());
}

#[test]
fn material_then_overlay_pipeline() {
    let mut gear = generate(ModelType::SpurGear, &ParameterSet::new()).unwrap();
    apply_material(&mut gear, MaterialChoice::Steel);
    let once = gear.clone();
    apply_material(&mut gear, MaterialChoice::Steel);
    assert_eq!(gear, once);

    let overlay = SimulationOverlay::new(OverlayKind::Stress, 80.0);
    apply_overlay(&mut gear, &overlay);
    let overlaid = gear.clone();
    apply_material(&mut gear, MaterialChoice::Plastic);
    apply_overlay(&mut gear, &overlay);
    assert_eq!(gear, overlaid);

    for (_, primitive) in gear.world_primitives() {
        if primitive.is_hole() {
            assert_eq!(primitive.finish.color.to_string(), "#303841");
        }
    }
}

#[test]
fn invalid_parameters_are_rejected() {
    let zero_teeth = ParameterSet::new().with("teeth", 0);
    assert!(matches!(
        generate(ModelType::SpurGear, &zero_teeth),
        Err(GenerateError::InvalidParameter { .. })
    ));

    let negative = ParameterSet::new().with("thickness", -1.0);
    assert!(generate(ModelType::MountingBracket, &negative).is_err());

    let fractional = ParameterSet::new().with("finCount", 2.5);
    assert!(generate(ModelType::HeatSink, &fractional).is_err());

    let nan = ParameterSet::new().with("diameter", f64::NAN);
    assert!(generate(ModelType::FlangedCoupling, &nan).is_err());

    let flag_for_number = ParameterSet::new().with("diameter", true);
    assert!(matches!(
        generate(ModelType::SpurGear, &flag_for_number),
        Err(GenerateError::WrongParameterKind { .. })
    ));
}

#[test]
fn slider_json_drives_generation() {
    let params: ParameterSet =
        serde_json::from_str(r#"{"teeth": [12], "holeCount": [3], "showHoles": true}"#).unwrap();
    let gear = generate(ModelType::SpurGear, &params).unwrap();
    assert_eq!(gear.primitive_count(), 1 + 12 + 1 + 3);
}
