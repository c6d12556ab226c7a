#![cfg(test)]

mod audit;
mod fakes;
