#[cfg(test)]
mod common;

#[cfg(test)]
mod menu_tests;

#[cfg(test)]
mod upcoming_tests;

#[cfg(test)]
mod enrollment_tests;

#[cfg(test)]
mod billing_tests;

#[cfg(test)]
mod credit_tests;

#[cfg(test)]
mod attendance_tests;

#[cfg(test)]
mod schedule_status_tests;
