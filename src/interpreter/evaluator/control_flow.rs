use crate::{
    ast::{If, Node},
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
    util::num::truncate_to_i64,
};

impl Context {
    /// Evaluates an `if` / `elseif` / `else` chain.
    ///
    /// Arms are tried in order and the first one whose condition is truthy
    /// runs; if none is, the `else` arm runs when present.
    ///
    /// # Returns
    /// The value of the body that ran, if it produced one.
    pub(crate) fn eval_conditional(&mut self,
                                   cases: &[If],
                                   else_case: Option<&If>)
                                   -> EvalResult<Option<Value>> {
        for case in cases {
            let taken = match &case.condition {
                Some(condition) => self.eval_value(condition)?.is_truthy(),
                None => true,
            };

            if taken {
                return self.eval_body(&case.body);
            }
        }

        match else_case {
            Some(case) => self.eval_body(&case.body),
            None => Ok(None),
        }
    }

    /// Evaluates `repeat <count> then ... end`.
    ///
    /// The count is evaluated once and truncated towards zero. Counts of zero
    /// or less run the body no times.
    pub(crate) fn eval_repeat(&mut self,
                              count: &Node,
                              body: &[Node],
                              line: usize)
                              -> EvalResult<Option<Value>> {
        let count = self.eval_value(count)?.as_number(line)?;
        let count = truncate_to_i64(count, line)?;

        for _ in 0..count.max(0) {
            self.eval_body(body)?;
        }

        Ok(None)
    }

    /// Evaluates `while <condition> then ... end`.
    ///
    /// The condition is checked before every iteration.
    pub(crate) fn eval_while(&mut self, condition: &Node, body: &[Node]) -> EvalResult<Option<Value>> {
        while self.eval_value(condition)?.is_truthy() {
            self.eval_body(body)?;
        }

        Ok(None)
    }

    /// Evaluates `each <iterator> in <iterable> then ... end`.
    ///
    /// The iterable is evaluated once. Arrays yield their elements and
    /// strings yield one-character strings. The iterator is bound in the
    /// current scope before each run of the body and removed once the loop
    /// is over, also when the iterable was empty.
    ///
    /// # Errors
    /// Returns a `TypeError` if the iterable is a number or a boolean.
    pub(crate) fn eval_each(&mut self,
                            iterator: &str,
                            iterable: &Node,
                            body: &[Node],
                            line: usize)
                            -> EvalResult<Option<Value>> {
        let items = self.eval_value(iterable)?.elements(line)?;

        let outcome = items.into_iter().try_for_each(|item| {
                                           self.set_variable(iterator, item);
                                           self.eval_body(body).map(|_| ())
                                       });
        self.remove_variable(iterator);
        outcome?;

        Ok(None)
    }
}
