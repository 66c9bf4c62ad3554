// Linear probabilistic model — binary logistic regression.

pub mod logistic;
