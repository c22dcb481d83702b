//! Builder for test tickets, so tests do not need a ticket source.

use ticketboard::Ticket;

/// Builder for creating test tickets
pub struct TicketBuilder {
    ticket: Ticket,
}

impl TicketBuilder {
    /// Create a new ticket builder with the given ID
    pub fn new(id: &str) -> Self {
        Self {
            ticket: Ticket {
                id: id.to_string(),
                status: "Open".to_string(),
                ticket_type: "Bug".to_string(),
                priority: "Medium".to_string(),
                created_date: "2024-01-01T00:00:00Z".to_string(),
                ..Default::default()
            },
        }
    }

    pub fn name(mut self, name: &str) -> Self {
        self.ticket.name = name.to_string();
        self
    }

    pub fn project(mut self, project: &str) -> Self {
        self.ticket.project = project.to_string();
        self
    }

    pub fn submitter(mut self, submitter: &str) -> Self {
        self.ticket.submitter = submitter.to_string();
        self
    }

    /// Set the assigned developer
    pub fn assigned(mut self, developer: &str) -> Self {
        self.ticket.assigned_developer = developer.to_string();
        self
    }

    pub fn priority(mut self, priority: &str) -> Self {
        self.ticket.priority = priority.to_string();
        self
    }

    pub fn status(mut self, status: &str) -> Self {
        self.ticket.status = status.to_string();
        self
    }

    pub fn ticket_type(mut self, ticket_type: &str) -> Self {
        self.ticket.ticket_type = ticket_type.to_string();
        self
    }

    pub fn description(mut self, description: &str) -> Self {
        self.ticket.description = description.to_string();
        self
    }

    /// Set the creation date as raw text
    pub fn created(mut self, created: &str) -> Self {
        self.ticket.created_date = created.to_string();
        self
    }

    pub fn build(self) -> Ticket {
        self.ticket
    }
}

/// Create a ticket with just a name and priority
pub fn mock_ticket(id: &str, name: &str, priority: &str) -> Ticket {
    TicketBuilder::new(id).name(name).priority(priority).build()
}
