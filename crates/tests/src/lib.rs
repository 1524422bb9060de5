#[cfg(test)]
mod common;

#[cfg(test)]
mod auth_tests;

#[cfg(test)]
mod donor_tests;

#[cfg(test)]
mod request_tests;

#[cfg(test)]
mod inventory_tests;
