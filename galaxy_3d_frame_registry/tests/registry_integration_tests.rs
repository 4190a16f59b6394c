//! Integration tests for the frame registry
//!
//! These tests drive registration, batching, lifecycle, and submission
//! through the public `galaxy3d` namespace only.
//! No GPU required.
//!
//! Run with: cargo test --test registry_integration_tests

use galaxy_3d_frame_registry::galaxy3d::{Error, Result, RegistryConfig, ClearPolicy};
use galaxy_3d_frame_registry::galaxy3d::light::{Light, LightType, StandardLight};
use galaxy_3d_frame_registry::galaxy3d::registry::{
    DrawData, FrameRegistry, LifecycleState, MeshHandle, MeshRenderable, Renderable,
};
use galaxy_3d_frame_registry::galaxy3d::render::{
    submit_frame, BatchDrawer, Command, CommandBuffer, RenderPipeline, ViewParams,
};
use galaxy_3d_frame_registry::galaxy3d::resource::{Material, MaterialDesc, ParamValue};
use galaxy_3d_frame_registry::glam::{DVec3, Mat4, Vec3};
use std::sync::Arc;

// ============================================================================
// HELPERS
// ============================================================================

fn material(name: &str) -> Arc<Material> {
    Material::shared(MaterialDesc {
        name: name.to_string(),
        pipeline: "forward".to_string(),
        params: vec![("base_color".to_string(), ParamValue::Vec4([1.0; 4]))],
    })
    .unwrap()
}

fn mesh(id: u32, material: &Arc<Material>) -> Arc<dyn Renderable> {
    Arc::new(MeshRenderable::new(
        format!("mesh_{}", id),
        material.clone(),
        DrawData::indexed(MeshHandle(id), Mat4::IDENTITY, 36),
    ))
}

fn slots(registry: &FrameRegistry, material: &Arc<Material>) -> Vec<usize> {
    registry.batch(material).unwrap().slots().collect()
}

/// Pipeline that keeps every buffer it is handed
#[derive(Default)]
struct RecordingPipeline {
    frames: Vec<CommandBuffer>,
}

impl RenderPipeline for RecordingPipeline {
    fn submit(&mut self, commands: CommandBuffer) -> Result<()> {
        self.frames.push(commands);
        Ok(())
    }

    fn resize_backbuffer(&mut self, _width: u32, _height: u32) -> Result<()> {
        Ok(())
    }
}

// ============================================================================
// REGISTRATION AND BATCHING
// ============================================================================

#[test]
fn test_integration_interleaved_materials_batch_by_identity() {
    let mut registry = FrameRegistry::new();
    let mat_a = material("A");
    let mat_b = material("B");

    let r1 = mesh(1, &mat_a);
    let r2 = mesh(2, &mat_b);
    let r3 = mesh(3, &mat_a);
    registry.add_renderable(r1.clone()).unwrap();
    registry.add_renderable(r2.clone()).unwrap();
    registry.add_renderable(r3.clone()).unwrap();

    let listed = registry.renderables();
    assert_eq!(listed.len(), 3);
    assert!(Arc::ptr_eq(&listed[0], &r1));
    assert!(Arc::ptr_eq(&listed[1], &r2));
    assert!(Arc::ptr_eq(&listed[2], &r3));

    assert_eq!(registry.batch_count(), 2);
    assert_eq!(slots(&registry, &mat_a), vec![0, 2]);
    assert_eq!(slots(&registry, &mat_b), vec![1]);
}

#[test]
fn test_integration_equal_but_distinct_materials_are_separate_batches() {
    let mut registry = FrameRegistry::new();
    let first = material("same");
    let second = material("same");

    registry.add_renderable(mesh(1, &first)).unwrap();
    registry.add_renderable(mesh(2, &second)).unwrap();

    assert_eq!(registry.batch_count(), 2);
    assert_eq!(slots(&registry, &first), vec![0]);
    assert_eq!(slots(&registry, &second), vec![1]);
}

#[test]
fn test_integration_duplicate_registration_yields_two_entries() {
    let mut registry = FrameRegistry::new();
    let mat = material("A");
    let renderable = mesh(1, &mat);

    let first = registry.add_renderable(renderable.clone()).unwrap();
    let second = registry.add_renderable(renderable.clone()).unwrap();

    assert_ne!(first, second);
    assert_eq!(registry.renderable_count(), 2);
    assert_eq!(slots(&registry, &mat), vec![0, 1]);
}

#[test]
fn test_integration_renderable_without_material_is_rejected() {
    let mut registry = FrameRegistry::new();
    let orphan = Arc::new(MeshRenderable::without_material(
        "orphan",
        DrawData::non_indexed(MeshHandle(9), Mat4::IDENTITY, 3),
    ));

    let result = registry.add_renderable(orphan);
    assert!(matches!(result, Err(Error::InvalidMaterial(_))));
    assert_eq!(registry.renderable_count(), 0);
    assert_eq!(registry.batch_count(), 0);
}

#[test]
fn test_integration_lights_keep_call_order_and_duplicates() {
    let mut registry = FrameRegistry::new();
    let sun: Arc<dyn Light> = Arc::new(StandardLight::directional(Vec3::NEG_Y, Vec3::ONE, 3.0));
    let lamp: Arc<dyn Light> = Arc::new(StandardLight::point(DVec3::new(0.0, 2.0, 0.0), Vec3::ONE, 1.0, 10.0));
    let torch: Arc<dyn Light> = Arc::new(StandardLight::spot(
        DVec3::ZERO,
        Vec3::NEG_Z,
        Vec3::ONE,
        1.0,
        15.0,
        0.3,
        0.5,
    ));

    registry.add_light(sun.clone());
    registry.add_light(lamp.clone());
    registry.add_light(torch.clone());
    registry.add_light(lamp.clone());

    let lights = registry.lights();
    assert_eq!(lights.len(), 4);
    assert!(Arc::ptr_eq(&lights[0], &sun));
    assert!(Arc::ptr_eq(&lights[1], &lamp));
    assert!(Arc::ptr_eq(&lights[2], &torch));
    assert!(Arc::ptr_eq(&lights[3], &lamp));
    assert_eq!(lights[2].light_type(), LightType::Spot);
}

// ============================================================================
// LIFECYCLE
// ============================================================================

#[test]
fn test_integration_clear_twice_equals_once() {
    let mut registry = FrameRegistry::new();
    let mat = material("A");
    registry.add_renderable(mesh(1, &mat)).unwrap();

    registry.clear_renderables();
    let epoch = registry.epoch();
    registry.clear_renderables();

    assert_eq!(registry.epoch(), epoch);
    assert_eq!(registry.renderable_count(), 0);
    assert_eq!(registry.batches().len(), 0);
}

#[test]
fn test_integration_unload_then_reuse() {
    let mut registry = FrameRegistry::new();
    let mat = material("A");
    let stale = registry.add_renderable(mesh(1, &mat)).unwrap();
    registry.add_light(Arc::new(StandardLight::directional(Vec3::NEG_Y, Vec3::ONE, 1.0)));

    registry.unload();
    assert_eq!(registry.state(), LifecycleState::Cleared);
    assert!(registry.lights().is_empty());
    assert!(matches!(registry.renderable(stale), Err(Error::StaleIndex { .. })));

    let fresh = registry.add_renderable(mesh(2, &mat)).unwrap();
    assert_eq!(fresh.slot(), 0);
    assert!(registry.renderable(fresh).is_ok());
    assert_eq!(slots(&registry, &mat), vec![0]);
}

#[test]
fn test_integration_index_is_bound_to_its_registry() {
    let mut first = FrameRegistry::new();
    let mut second = FrameRegistry::new();
    let mat = material("A");

    let index = first.add_renderable(mesh(1, &mat)).unwrap();
    second.add_renderable(mesh(2, &mat)).unwrap();

    assert_eq!(index.registry(), first.renderable_registry().id());
    assert!(matches!(second.renderable(index), Err(Error::ForeignIndex { .. })));
    assert_eq!(first.renderable(index).unwrap().name(), "mesh_1");
}

#[test]
fn test_integration_on_unload_policy_accumulates_across_frames() {
    let mut registry = FrameRegistry::new();
    let mat = material("A");

    for frame in 0..3 {
        registry.begin_frame();
        registry.add_renderable(mesh(frame, &mat)).unwrap();
    }

    assert_eq!(registry.frame_index(), 3);
    assert_eq!(registry.renderable_count(), 3);
    assert_eq!(slots(&registry, &mat), vec![0, 1, 2]);
}

#[test]
fn test_integration_every_frame_policy_starts_each_frame_empty() {
    let config = RegistryConfig::new().with_clear_policy(ClearPolicy::EveryFrame);
    let mut registry = FrameRegistry::with_config(config);
    let mat = material("A");

    for frame in 0..3 {
        registry.begin_frame();
        registry.add_renderable(mesh(frame, &mat)).unwrap();
        registry.add_light(Arc::new(StandardLight::directional(Vec3::NEG_Y, Vec3::ONE, 1.0)));
        assert_eq!(registry.renderable_count(), 1);
        assert_eq!(registry.light_count(), 1);
    }
}

// ============================================================================
// SUBMISSION
// ============================================================================

#[test]
fn test_integration_submit_frame_one_bind_per_batch() {
    let mut registry = FrameRegistry::new();
    let mat_a = material("A");
    let mat_b = material("B");
    for (id, mat) in [(1, &mat_a), (2, &mat_b), (3, &mat_a), (4, &mat_b), (5, &mat_a)] {
        registry.add_renderable(mesh(id, mat)).unwrap();
    }
    registry.add_light(Arc::new(
        StandardLight::point(DVec3::new(1.0e6, 0.0, 0.0), Vec3::ONE, 1.0, 5.0).with_shadows(true),
    ));

    let view = ViewParams::new(DVec3::new(1.0e6 - 1.0, 0.0, 0.0));
    let mut pipeline = RecordingPipeline::default();
    let draws = submit_frame(&registry, &BatchDrawer::new(), &mut pipeline, &view).unwrap();

    assert_eq!(draws, 5);
    assert_eq!(pipeline.frames.len(), 1);

    let frame = &pipeline.frames[0];
    assert_eq!(frame.material_bind_count(), 2);

    let meshes: Vec<u32> = frame
        .commands()
        .iter()
        .filter_map(|command| match command {
            Command::Draw(draw) => Some(draw.mesh.0),
            _ => None,
        })
        .collect();
    assert_eq!(meshes, vec![1, 3, 5, 2, 4]);

    match &frame.commands()[0] {
        Command::UploadLights(records) => {
            assert_eq!(records.len(), 1);
            assert_eq!(records[0].position(), Vec3::new(1.0, 0.0, 0.0));
        }
        other => panic!("expected light upload first, got {:?}", other),
    }
}

#[test]
fn test_integration_submission_is_repeatable_under_on_unload() {
    let mut registry = FrameRegistry::new();
    let mat = material("A");
    registry.add_renderable(mesh(1, &mat)).unwrap();

    let mut pipeline = RecordingPipeline::default();
    for _ in 0..2 {
        registry.begin_frame();
        submit_frame(&registry, &BatchDrawer::new(), &mut pipeline, &ViewParams::default()).unwrap();
    }

    assert_eq!(pipeline.frames.len(), 2);
    assert_eq!(pipeline.frames[0].len(), pipeline.frames[1].len());
}
