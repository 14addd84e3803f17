//! Upgrade shop at the main airfield.

use thiserror::Error;

use crate::config::Tunables;

/// A purchasable airframe improvement. Each can be bought once.
#[derive(Debug, Clone)]
pub struct Upgrade {
    pub name: &'static str,
    pub cost: u32,
    pub description: &'static str,
    pub applied: bool,
}

/// The shop's catalog plus whether its menu is currently open.
#[derive(Debug, Clone)]
pub struct UpgradeShop {
    pub open: bool,
    upgrades: Vec<Upgrade>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PurchaseError {
    #[error("no such upgrade")]
    UnknownUpgrade,
    #[error("{0} is already installed")]
    AlreadyApplied(&'static str),
    #[error("{0} costs {1}₺, not enough money")]
    InsufficientFunds(&'static str, u32),
}

impl UpgradeShop {
    pub fn new() -> Self {
        Self {
            open: false,
            upgrades: vec![
                Upgrade {
                    name: "Engine Tune",
                    cost: 500,
                    description: "Top speed and acceleration +20%",
                    applied: false,
                },
                Upgrade {
                    name: "Lightweight Materials",
                    cost: 700,
                    description: "Cargo capacity +2, weight limit +4 tons",
                    applied: false,
                },
                Upgrade {
                    name: "Reinforced Landing Gear",
                    cost: 600,
                    description: "Tolerates faster and steeper touchdowns",
                    applied: false,
                },
                Upgrade {
                    name: "Advanced Avionics",
                    cost: 800,
                    description: "Control authority +50%",
                    applied: false,
                },
            ],
        }
    }

    pub fn upgrades(&self) -> &[Upgrade] {
        &self.upgrades
    }

    /// Buy the upgrade at `index`, deducting its cost and mutating the
    /// airframe tunables. Returns the upgrade name for the notification.
    pub fn purchase(
        &mut self,
        index: usize,
        money: &mut u32,
        tunables: &mut Tunables,
    ) -> Result<&'static str, PurchaseError> {
        let upgrade = self
            .upgrades
            .get_mut(index)
            .ok_or(PurchaseError::UnknownUpgrade)?;
        if upgrade.applied {
            return Err(PurchaseError::AlreadyApplied(upgrade.name));
        }
        if *money < upgrade.cost {
            return Err(PurchaseError::InsufficientFunds(upgrade.name, upgrade.cost));
        }

        *money -= upgrade.cost;
        upgrade.applied = true;
        match index {
            0 => {
                tunables.max_speed *= 1.2;
                tunables.acceleration *= 1.2;
            }
            1 => {
                tunables.cargo_capacity += 2;
                tunables.max_cargo_weight += 4.0;
            }
            2 => {
                tunables.landing_speed *= 1.3;
                tunables.landing_pitch *= 1.3;
            }
            3 => {
                tunables.rotation_speed *= 1.5;
            }
            _ => unreachable!("catalog has four entries"),
        }
        Ok(upgrade.name)
    }
}

impl Default for UpgradeShop {
    fn default() -> Self {
        Self::new()
    }
}

/// The shop only opens when parked on the main airfield's runway, which runs
/// from the threshold at z = 0 to the far end at z = 200 on the pad side.
pub fn shop_accessible(landed: bool, on_runway: bool, z: f32) -> bool {
    landed && on_runway && z > 0.0 && z < 200.0
}
