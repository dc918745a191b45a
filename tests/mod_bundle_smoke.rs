use dust_engine::domain::behavior::{BehaviorKind, ScriptOp};
use dust_engine::{MaterialError, Simulation, StartupConfig};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn bundle() -> String {
    let fizz = BehaviorKind::Script {
        ops: vec![
            ScriptOp::Jitter {
                chance: 0.2,
                min: -1.0,
                max: 1.0,
            },
            ScriptOp::Expire {
                max_age: 40,
                into: "AIR".to_string(),
            },
        ],
    };
    format!(
        r#"{{
            "SLIME": {{
                "gravity": true, "draw": true, "default_physics": true,
                "color": [40, 220, 60, 255], "friction": 0.9,
                "physics_custom": "{water}"
            }},
            "FIZZ": {{
                "gravity": true, "draw": true, "solid": true, "default_physics": true,
                "color": "250,250,250,255",
                "physics_custom": "{fizz}"
            }},
            "BROKEN": {{ "color": "300,0,0,255" }},
            "WALL": {{ "color": "1,1,1,1" }}
        }}"#,
        water = BehaviorKind::Water.encode(),
        fizz = fizz.encode()
    )
}

#[test]
fn bundle_loads_good_entries_and_reports_the_rest() {
    init_logging();
    let mut sim = Simulation::new(&StartupConfig::new(32, 32)).unwrap();
    let report = sim.load_mods(&bundle()).unwrap();

    let mut loaded: Vec<&str> = report.loaded.iter().map(|(n, _)| n.as_str()).collect();
    loaded.sort_unstable();
    assert_eq!(loaded, vec!["FIZZ", "SLIME"]);

    let rejected: Vec<&str> = report.rejected.iter().map(|(n, _)| n.as_str()).collect();
    assert!(rejected.contains(&"BROKEN"));
    assert!(report
        .rejected
        .iter()
        .any(|(_, e)| *e == MaterialError::DuplicateMaterial("WALL".to_string())));
}

#[test]
fn mod_materials_simulate_and_round_trip() {
    init_logging();
    let mut sim = Simulation::new(&StartupConfig::new(32, 32)).unwrap();
    sim.load_mods(&bundle()).unwrap();

    sim.paint(8, 4, 3, "SLIME").unwrap();
    sim.paint(24, 4, 3, "FIZZ").unwrap();
    for _ in 0..60 {
        sim.tick().unwrap();
    }
    let fizz = sim.materials().id_of("FIZZ").unwrap();
    assert_eq!(sim.grid().count(fizz), 0);
    let slime = sim.materials().id_of("SLIME").unwrap();
    assert_eq!(sim.grid().count(slime), 36);

    let exported = sim.export_mods();
    let mut fresh = Simulation::new(&StartupConfig::new(4, 4)).unwrap();
    let report = fresh.load_mods(&exported).unwrap();
    assert!(report.is_clean());
    assert_eq!(fresh.materials().lookup("SLIME"), sim.materials().lookup("SLIME"));
    assert_eq!(fresh.materials().lookup("FIZZ"), sim.materials().lookup("FIZZ"));
}
