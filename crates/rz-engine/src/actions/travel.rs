use rz_core::{Destination, Vehicle};
use tracing::debug;

use crate::error::GameResult;
use crate::session::GameSession;

/// Find the menu entry a player's choice refers to: its number, its label
/// or its location id.
fn pick<'a>(destinations: &'a [Destination], choice: &str) -> Option<&'a Destination> {
    let choice = choice.trim();
    if let Ok(n) = choice.parse::<usize>() {
        return n.checked_sub(1).and_then(|i| destinations.get(i));
    }
    destinations
        .iter()
        .find(|d| d.label.eq_ignore_ascii_case(choice) || d.id.eq_ignore_ascii_case(choice))
}

impl GameSession {
    pub(crate) fn travel(&mut self, vehicle: Vehicle) -> GameResult<String> {
        if !vehicle.can_depart_from(self.player.location.as_str()) {
            return Ok(vehicle.grounded_message().to_string());
        }
        let destinations = vehicle.destinations();
        self.console.show("Available destinations:");
        for (n, destination) in destinations.iter().enumerate() {
            let label = if self.player.can_travel_to(destination.id) {
                destination.label
            } else {
                "???"
            };
            self.console.show(&format!("{}. {label}", n + 1));
        }
        self.console
            .show(&format!("Where would you like to {}?", vehicle.verb()));

        let choice = self.console.read_line().unwrap_or_default();
        let Some(destination) = pick(destinations, &choice) else {
            return Ok("Invalid destination.".to_string());
        };
        if !self.player.can_travel_to(destination.id) {
            return Ok("That destination is locked.".to_string());
        }
        let there = self.world.location(destination.id)?;
        let response = format!("You {} to {}. {}", vehicle.verb(), there.name, there.describe());
        debug!(vehicle = vehicle.item_name(), to = destination.id, "fast travel");
        self.player.location = there.id.clone();
        Ok(response)
    }
}
