use crate::{CanvasData, CanvasSection};

/// Business-model canvas editor.
#[derive(Debug, Clone)]
pub struct BusinessModelPage {
    data: CanvasData,
    active: CanvasSection,
}

impl Default for BusinessModelPage {
    fn default() -> Self {
        Self {
            data: CanvasData::new(),
            active: CanvasSection::ValueProposition,
        }
    }
}

impl BusinessModelPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update_section(&mut self, section: CanvasSection, text: impl Into<String>) {
        self.data.update_section(section, text);
    }

    pub fn select(&mut self, section: CanvasSection) {
        self.active = section;
    }

    pub fn active_section(&self) -> CanvasSection {
        self.active
    }

    pub fn data(&self) -> &CanvasData {
        &self.data
    }

    /// Every section with its current text, in canvas order.
    pub fn sections(&self) -> impl Iterator<Item = (CanvasSection, &str)> + '_ {
        CanvasSection::ALL
            .into_iter()
            .map(move |section| (section, self.data.get(section)))
    }

    pub fn completion(&self) -> (usize, usize) {
        (self.data.filled_sections().len(), CanvasSection::ALL.len())
    }
}
