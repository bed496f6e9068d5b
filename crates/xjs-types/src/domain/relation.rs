use super::application::Application;
use super::model::Model;
use serde::Serialize;

/// Far side of a relation
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationPeer {
    /// An application registered on the model
    Registered(String),
    /// Synthesized because the document does not describe the partner
    Placeholder(Box<Application>),
}

impl RelationPeer {
    pub fn name(&self) -> &str {
        match self {
            RelationPeer::Registered(name) => name,
            RelationPeer::Placeholder(app) => &app.name,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, RelationPeer::Placeholder(_))
    }
}

/// Named endpoint pairing two applications
#[derive(Debug, Clone, Serialize)]
pub struct Relation {
    pub name: String,
    pub application: String,
    pub partner: RelationPeer,
}

impl Relation {
    /// Pair `application` with `partner` under the endpoint `name`, resolving
    /// the partner against the model's applications.
    pub fn new(model: &Model, name: &str, partner: &str, application: &str) -> Self {
        let partner = match model.get_application(partner) {
            Some(app) => RelationPeer::Registered(app.name.clone()),
            None => RelationPeer::Placeholder(Box::new(Application::placeholder(partner))),
        };

        Self {
            name: name.to_string(),
            application: application.to_string(),
            partner,
        }
    }

    pub fn partner_name(&self) -> &str {
        self.partner.name()
    }

    /// True when this relation joins `a` and `b`, in either order
    pub fn pairs(&self, a: &str, b: &str) -> bool {
        let (x, y) = (self.application.as_str(), self.partner_name());
        (x == a && y == b) || (x == b && y == a)
    }
}
