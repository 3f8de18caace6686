use super::{Catalog, GraphType, SchematicSpec, SensorCategory, SensorSpec};

fn sensor(
    key: &str,
    display_name: &str,
    units: &str,
    graph_type: GraphType,
    color_key: &str,
    category: SensorCategory,
) -> SensorSpec {
    SensorSpec {
        key: key.to_string(),
        display_name: display_name.to_string(),
        units: units.to_string(),
        graph_type,
        color_key: color_key.to_string(),
        category,
    }
}

fn schematic(model: &str, name: &str, description: &str, visible: bool) -> SchematicSpec {
    SchematicSpec {
        model: model.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        visible,
    }
}

pub(super) fn catalog() -> Catalog {
    use GraphType::{Line, VerticalBar};
    use SensorCategory::{Environment, Motion, System, Time};

    Catalog {
        sensors: vec![
            sensor("TEMPERATURE", "Env: Temp", "°C", VerticalBar, "SIDEBAR_HUMID", Environment),
            sensor("HUMIDITY", "Env: Humid", "%", VerticalBar, "SIDEBAR_TEMP", Environment),
            sensor("PRESSURE", "Atmos", "mbar", VerticalBar, "SIDEBAR_PRESS", Environment),
            sensor("ORIENTATION", "Attitude", "deg", Line, "SIDEBAR_ORIENT", Motion),
            sensor("ACCELERATION", "Inertia", "G", Line, "SIDEBAR_ACCEL", Motion),
            sensor("CLOCK", "Clock", "", GraphType::None, "SIDEBAR_ALL", Time),
            sensor("CPU_USAGE", "CPU", "%", VerticalBar, "SIDEBAR_SYSTEM", System),
            sensor("MEMORY_USAGE", "Memory", "%", VerticalBar, "SIDEBAR_SYSTEM", System),
            sensor("DISK_USAGE", "Disk", "%", VerticalBar, "SIDEBAR_SYSTEM", System),
        ],
        schematics: vec![
            schematic("ncc_1701", "NCC-1701 Enterprise", "Constitution-class starship", true),
            schematic("worf", "Worf", "Character, front view", false),
            schematic("apollo_1570", "Apollo NCC-1570", "Spaceship, side profile", true),
            schematic(
                "apollo_1701_refit",
                "Apollo NCC-1701 Refit",
                "Spaceship, side profile",
                false,
            ),
        ],
    }
}
