pub mod strategies;

#[cfg(test)]
mod iterable_laws;
#[cfg(test)]
mod maybe_laws;
