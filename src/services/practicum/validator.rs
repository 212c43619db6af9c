use serde_json::Value;

use crate::services::practicum::ResponseError;

/// Check the answer matches the documented shape and return its homework list.
///
/// An empty list is reported as [`ResponseError::EmptyHomeworks`]; callers decide
/// whether that means "nothing new" or a failure.
pub fn check_response(response: &Value) -> Result<&Vec<Value>, ResponseError> {
    let object = response.as_object().ok_or(ResponseError::NotAnObject)?;

    let homeworks = object
        .get("homeworks")
        .ok_or(ResponseError::MissingHomeworks)?
        .as_array()
        .ok_or(ResponseError::HomeworksNotAList)?;

    if homeworks.is_empty() {
        return Err(ResponseError::EmptyHomeworks);
    }

    Ok(homeworks)
}

/// Server time to use as the next `from_date`
pub fn current_date(response: &Value) -> Result<i64, ResponseError> {
    response
        .get("current_date")
        .and_then(Value::as_i64)
        .ok_or(ResponseError::MissingCurrentDate)
}
