
// Parser-evaluator tests
mod arithmetic;
mod errors;
mod rounding;
