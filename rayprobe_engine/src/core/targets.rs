use crate::tracing_targets;

tracing_targets! {
    RAYCAST = "raycast",
    SHAPE = "shape",
    PROBE = "probe",
}
