extern crate serde;

use super::Query;
use crate::{error::Result, types::ProblemRecord};
use serde::{Deserialize, Serialize};

const QUESTION_COUNT: &str = r#"
query problemsetQuestionList($categorySlug: String, $limit: Int, $skip: Int, $filters: QuestionListFilterInput) {
  problemsetQuestionList: questionList(
    categorySlug: $categorySlug
    limit: $limit
    skip: $skip
    filters: $filters
  ) {
    totalNum
  }
}
"#;

const QUESTION_PAGE: &str = r#"
query problemsetQuestionList($categorySlug: String, $limit: Int, $skip: Int, $filters: QuestionListFilterInput) {
  problemsetQuestionList: questionList(
    categorySlug: $categorySlug
    limit: $limit
    skip: $skip
    filters: $filters
  ) {
    questions: data {
      questionFrontendId
      title
      titleSlug
      categoryTitle
      freqBar
      content
      isPaidOnly
      difficulty
      likes
      dislikes
      topicTags {
        name
        slug
      }
      stats
      hints
    }
  }
}
"#;

const QUESTION_DETAIL: &str = r#"
query questionContent($titleSlug: String!) {
  question(titleSlug: $titleSlug) {
    content
    questionId
    questionFrontendId
    title
    titleSlug
    isPaidOnly
    difficulty
    likes
    dislikes
    categoryTitle
    freqBar
    topicTags {
      name
      slug
    }
    stats
    hints
  }
}
"#;

pub const QUESTION_LIST_OPERATION: &str = "problemsetQuestionList";
pub const QUESTION_OPERATION: &str = "questionContent";

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ListFilter<'a> {
    tags: Vec<String>,
    list_id: &'a str,
}
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ListVariables<'a> {
    category_slug: &'a str,
    limit: usize,
    skip: usize,
    filters: ListFilter<'a>,
}
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct QuestionVariables<'a> {
    title_slug: &'a str,
}

/// Number of problems under `list_id`, empty for the whole problem set.
pub fn count(list_id: &str) -> Result<Query> {
    Query::new(
        QUESTION_LIST_OPERATION,
        QUESTION_COUNT,
        &ListVariables {
            category_slug: "",
            limit: 1,
            skip: 0,
            filters: ListFilter {
                tags: Vec::new(),
                list_id,
            },
        },
    )
}
pub fn page(list_id: &str, skip: usize, limit: usize) -> Result<Query> {
    Query::new(
        QUESTION_LIST_OPERATION,
        QUESTION_PAGE,
        &ListVariables {
            category_slug: "",
            limit,
            skip,
            filters: ListFilter {
                tags: Vec::new(),
                list_id,
            },
        },
    )
}
pub fn question(slug: &str) -> Result<Query> {
    Query::new(
        QUESTION_OPERATION,
        QUESTION_DETAIL,
        &QuestionVariables { title_slug: slug },
    )
}

#[derive(Debug, Deserialize)]
pub struct QuestionList {
    #[serde(rename = "totalNum", default)]
    pub total: Option<usize>,
    #[serde(default)]
    pub questions: Option<Vec<ProblemRecord>>,
}
#[derive(Debug, Deserialize)]
pub struct QuestionListData {
    #[serde(rename = "problemsetQuestionList")]
    pub list: QuestionList,
}
#[derive(Debug, Deserialize)]
pub struct QuestionData {
    pub question: Option<ProblemRecord>,
}
