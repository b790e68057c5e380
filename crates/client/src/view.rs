use std::fmt;

use service::catalog::Service;

pub const LOADING_MSG: &str = "Loading services...";
pub const EMPTY_MSG: &str = "No services available. Add your first service above!";
pub const LOAD_FAILED_MSG: &str = "❌ Failed to load services. Please check your connection and try again.";

/// One rendered service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceCard {
    pub id: u64,
    pub icon: String,
    pub name: String,
    pub description: String,
}

impl From<Service> for ServiceCard {
    fn from(s: Service) -> Self {
        Self { id: s.id, icon: s.icon, name: s.name, description: s.description }
    }
}

/// What the services grid currently shows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ServicesView {
    #[default]
    Loading,
    Cards(Vec<ServiceCard>),
    Empty,
    LoadFailed,
}

impl ServicesView {
    pub fn from_services(services: Vec<Service>) -> Self {
        if services.is_empty() {
            ServicesView::Empty
        } else {
            ServicesView::Cards(services.into_iter().map(ServiceCard::from).collect())
        }
    }

    pub fn cards(&self) -> &[ServiceCard] {
        match self {
            ServicesView::Cards(cards) => cards,
            _ => &[],
        }
    }

    pub fn placeholder(&self) -> Option<&'static str> {
        match self {
            ServicesView::Loading => Some(LOADING_MSG),
            ServicesView::Empty => Some(EMPTY_MSG),
            ServicesView::LoadFailed => Some(LOAD_FAILED_MSG),
            ServicesView::Cards(_) => None,
        }
    }
}

impl fmt::Display for ServicesView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(msg) = self.placeholder() {
            return writeln!(f, "{msg}");
        }
        for card in self.cards() {
            writeln!(f, "[{}] {} {}", card.id, card.icon, card.name)?;
            writeln!(f, "    {}", card.description)?;
        }
        Ok(())
    }
}
