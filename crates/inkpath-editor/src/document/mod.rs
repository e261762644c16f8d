//! The document: ordered layers of drawing objects plus page size.
//!
//! Layers are painted in order and the objects inside a layer in insertion
//! order, so the last object of the last layer is the topmost. At least one
//! layer always exists, and at most one object is active at a time.

pub mod types;

pub use types::{DrawingObject, Layer};

use inkpath_core::constants::DEFAULT_LAYER_ID;
use inkpath_settings::PageSize;

use crate::model::{Point, Shape, ShapeStyle};

#[derive(Debug, Clone)]
pub struct Document {
    layers: Vec<Layer>,
    current_layer: usize,
    page: PageSize,
    next_id: u64,
}

impl Document {
    /// Empty document with the default page and one layer.
    pub fn new() -> Self {
        Self::with_page_size(PageSize::default())
    }

    pub fn with_page_size(page: PageSize) -> Self {
        Self {
            layers: vec![Layer::new(DEFAULT_LAYER_ID)],
            current_layer: 0,
            page,
            next_id: 1,
        }
    }

    /// Document made of the given layers. An empty list yields one default layer.
    pub fn from_layers(page: PageSize, layers: Vec<Layer>) -> Self {
        let mut doc = Self::with_page_size(page);
        if layers.is_empty() {
            return doc;
        }
        doc.layers.clear();
        for mut layer in layers {
            for obj in &mut layer.objects {
                obj.id = doc.generate_id();
                obj.layer_id = layer.id.clone();
                obj.selected = false;
            }
            doc.layers.push(layer);
        }
        doc
    }

    pub fn page_size(&self) -> PageSize {
        self.page
    }

    pub fn generate_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn layer(&self, id: &str) -> Option<&Layer> {
        self.layers.iter().find(|l| l.id == id)
    }

    pub fn current_layer(&self) -> &Layer {
        &self.layers[self.current_layer]
    }

    pub fn current_layer_id(&self) -> &str {
        &self.layers[self.current_layer].id
    }

    /// Makes `id` the layer new shapes go to.
    pub fn select_layer(&mut self, id: &str) -> bool {
        match self.layers.iter().position(|l| l.id == id) {
            Some(index) => {
                self.current_layer = index;
                true
            }
            None => {
                tracing::warn!("No layer '{}' to select", id);
                false
            }
        }
    }

    /// First `layerN` id not yet used.
    pub fn next_layer_id(&self) -> String {
        (self.layers.len() + 1..)
            .map(|n| format!("layer{}", n))
            .find(|candidate| self.layer(candidate).is_none())
            .unwrap_or_else(|| DEFAULT_LAYER_ID.to_string())
    }

    /// Appends a layer on top and makes it current. Returns its id.
    pub fn add_layer(&mut self, id: Option<&str>) -> String {
        let id = match id.map(str::trim) {
            Some(id) if !id.is_empty() && self.layer(id).is_none() => id.to_string(),
            _ => self.next_layer_id(),
        };
        self.layers.push(Layer::new(id.clone()));
        self.current_layer = self.layers.len() - 1;
        tracing::debug!("Added layer '{}'", id);
        id
    }

    /// Removes a layer and its shapes. The last remaining layer is never removed.
    pub fn remove_layer(&mut self, id: &str) -> bool {
        if self.layers.len() <= 1 {
            tracing::warn!("Refusing to remove the only layer '{}'", id);
            return false;
        }
        let Some(index) = self.layers.iter().position(|l| l.id == id) else {
            return false;
        };
        self.layers.remove(index);
        if self.current_layer >= index && self.current_layer > 0 {
            self.current_layer -= 1;
        }
        tracing::debug!("Removed layer '{}'", id);
        true
    }

    /// Adds a shape to the current layer and returns its id.
    pub fn add_shape(&mut self, shape: Shape, style: ShapeStyle) -> u64 {
        let id = self.generate_id();
        let layer = &mut self.layers[self.current_layer];
        layer
            .objects
            .push(DrawingObject::create(id, layer.id.clone(), shape, style));
        id
    }

    pub fn shape_count(&self) -> usize {
        self.layers.iter().map(|l| l.objects.len()).sum()
    }

    /// Objects in paint order, bottom first.
    pub fn objects(&self) -> impl DoubleEndedIterator<Item = &DrawingObject> {
        self.layers.iter().flat_map(|l| l.objects.iter())
    }

    pub fn objects_mut(&mut self) -> impl Iterator<Item = &mut DrawingObject> {
        self.layers.iter_mut().flat_map(|l| l.objects.iter_mut())
    }

    pub fn get(&self, id: u64) -> Option<&DrawingObject> {
        self.objects().find(|o| o.id == id)
    }

    pub fn get_mut(&mut self, id: u64) -> Option<&mut DrawingObject> {
        self.objects_mut().find(|o| o.id == id)
    }

    pub fn remove(&mut self, id: u64) -> Option<DrawingObject> {
        for layer in &mut self.layers {
            if let Some(pos) = layer.objects.iter().position(|o| o.id == id) {
                return Some(layer.objects.remove(pos));
            }
        }
        None
    }

    /// Topmost object under `point`, with `tolerance` widened by each stroke.
    pub fn hit_test(&self, point: &Point, tolerance: f64) -> Option<u64> {
        self.objects()
            .rev()
            .find(|o| o.contains_point(point, tolerance))
            .map(|o| o.id)
    }

    pub fn active_id(&self) -> Option<u64> {
        self.objects().find(|o| o.selected).map(|o| o.id)
    }

    pub fn active(&self) -> Option<&DrawingObject> {
        self.objects().find(|o| o.selected)
    }

    /// Marks `id` as the single active object, or clears the selection.
    pub fn set_active(&mut self, id: Option<u64>) -> bool {
        let mut found = false;
        for obj in self.objects_mut() {
            obj.selected = Some(obj.id) == id;
            found |= obj.selected;
        }
        found
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}
