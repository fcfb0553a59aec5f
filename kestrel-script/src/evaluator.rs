// This file is part of kestrel, an interactive command shell.
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! The scripting fallback (§6.1): a line the pipeline executor couldn't
//! classify is handed here, first as an expression, then as a statement
//! block if the expression form doesn't parse.

use crate::error::ScriptError;
use kestrel_env::Environment;
use rhai::{Dynamic, Engine, EvalAltResult, Scope};

/// Evaluates shell lines that fall through the pipeline executor as
/// expressions or statements of the embedded scripting language.
pub struct Evaluator {
    engine: Engine,
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new()
    }
}

impl Evaluator {
    pub fn new() -> Self {
        Evaluator {
            engine: Engine::new(),
        }
    }

    /// Evaluates `source`, first as an expression and, if that fails to
    /// parse or resolve, as a statement block that may mutate `env`.
    pub fn eval(&self, source: &str, env: &mut Environment) -> Result<Option<String>, ScriptError> {
        let mut scope = Scope::new();
        push_env_into_scope(env, &mut scope);

        match self
            .engine
            .eval_expression_with_scope::<Dynamic>(&mut scope, source)
        {
            Ok(value) => return Ok(format_value(value)),
            Err(err) => {
                if let Some(name) = name_error(&err) {
                    return Err(ScriptError::NameError(name));
                }
            }
        }

        match self.engine.eval_with_scope::<Dynamic>(&mut scope, source) {
            Ok(value) => {
                sync_scope_into_env(&scope, env);
                Ok(format_value(value))
            }
            Err(err) => match name_error(&err) {
                Some(name) => Err(ScriptError::NameError(name)),
                None => Err(ScriptError::Eval(err.to_string())),
            },
        }
    }
}

fn push_env_into_scope(env: &Environment, scope: &mut Scope) {
    for (name, value) in env.iter() {
        if let Ok(i) = value.parse::<i64>() {
            scope.push(name.to_owned(), i);
        } else if let Ok(f) = value.parse::<f64>() {
            scope.push(name.to_owned(), f);
        } else if let Ok(b) = value.parse::<bool>() {
            scope.push(name.to_owned(), b);
        } else {
            scope.push(name.to_owned(), value.to_owned());
        }
    }
}

fn sync_scope_into_env(scope: &Scope, env: &mut Environment) {
    for (name, _is_const, value) in scope.iter() {
        if value.is::<rhai::ImmutableString>()
            || value.is::<i64>()
            || value.is::<f64>()
            || value.is::<bool>()
        {
            env.set(name, value.to_string());
        }
    }
}

fn format_value(value: Dynamic) -> Option<String> {
    if value.is_unit() {
        None
    } else {
        Some(value.to_string())
    }
}

fn name_error(err: &EvalAltResult) -> Option<String> {
    match err {
        EvalAltResult::ErrorVariableNotFound(name, _) => Some(name.clone()),
        EvalAltResult::ErrorFunctionNotFound(signature, _) => Some(
            signature
                .split(|c: char| c == ' ' || c == '(')
                .next()
                .unwrap_or(signature)
                .to_owned(),
        ),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evaluates_an_arithmetic_expression() {
        let evaluator = Evaluator::new();
        let mut env = Environment::new();
        let result = evaluator.eval("1 + 2", &mut env).unwrap();
        assert_eq!(result, Some("3".to_owned()));
    }

    #[test]
    fn reads_a_numeric_environment_variable() {
        let evaluator = Evaluator::new();
        let mut env = Environment::new();
        env.set("X", "5");
        let result = evaluator.eval("X + 1", &mut env).unwrap();
        assert_eq!(result, Some("6".to_owned()));
    }

    #[test]
    fn statement_form_mutates_the_environment() {
        let evaluator = Evaluator::new();
        let mut env = Environment::new();
        let result = evaluator.eval("let x = 10; x", &mut env).unwrap();
        assert_eq!(result, Some("10".to_owned()));
        assert_eq!(env.get("x"), Some("10"));
    }

    #[test]
    fn unresolved_name_is_a_name_error() {
        let evaluator = Evaluator::new();
        let mut env = Environment::new();
        let err = evaluator.eval("totally_undefined_name", &mut env).unwrap_err();
        assert!(matches!(err, ScriptError::NameError(name) if name == "totally_undefined_name"));
    }

    #[test]
    fn unresolved_function_call_is_a_name_error() {
        let evaluator = Evaluator::new();
        let mut env = Environment::new();
        let err = evaluator.eval("totally_undefined_func()", &mut env).unwrap_err();
        assert!(matches!(err, ScriptError::NameError(name) if name == "totally_undefined_func"));
    }
}
