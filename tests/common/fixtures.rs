//! Test fixtures for Confluence API responses
//!
//! This module provides realistic sample data from the Confluence REST API
//! for use in tests. Listing fixtures take the serving base URL so that
//! pagination links point back at the test server.

use serde_json::json;

// Sample response for the first page of a content listing
pub fn content_list_response(base: &str) -> serde_json::Value {
  json!({
    "results": [
      {
        "id": "123456",
        "type": "page",
        "status": "current",
        "title": "Getting Started Guide",
        "body": {
          "storage": {
            "value": "<h1>Getting Started</h1><p>Welcome to our documentation!</p>",
            "representation": "storage"
          }
        },
        "_expandable": {
          "space": "/rest/api/space/DOCS"
        },
        "_links": {
          "self": "https://example.atlassian.net/wiki/rest/api/content/123456",
          "webui": "/spaces/DOCS/pages/123456/Getting+Started+Guide",
          "tinyui": "/x/AbCdE"
        }
      },
      {
        "id": "789012",
        "type": "page",
        "status": "current",
        "title": "API Documentation",
        "body": {
          "storage": {
            "value": "<h1>API Documentation</h1><p>This API provides access to our services.</p>",
            "representation": "storage"
          }
        },
        "_expandable": {
          "space": "/rest/api/space/DEV"
        },
        "_links": {
          "self": "https://example.atlassian.net/wiki/rest/api/content/789012",
          "webui": "/spaces/DEV/pages/789012/API+Documentation",
          "tinyui": "/x/FgHiJ"
        }
      }
    ],
    "start": 0,
    "limit": 25,
    "size": 2,
    "_links": {
      "base": base,
      "context": "",
      "self": format!("{base}/content/"),
      "next": "/content/?limit=25&start=25"
    }
  })
}

// Sample response for the second and final page of a content listing
pub fn content_list_page_two_response(base: &str) -> serde_json::Value {
  json!({
    "results": [
      {
        "id": "345678",
        "type": "page",
        "status": "current",
        "title": "Installation Guide",
        "body": {
          "storage": {
            "value": "<h1>Installation</h1><ol><li>Download the installer</li><li>Run the setup wizard</li></ol>",
            "representation": "storage"
          }
        },
        "_links": {
          "self": "https://example.atlassian.net/wiki/rest/api/content/345678",
          "webui": "/spaces/DOCS/pages/345678/Installation+Guide"
        }
      }
    ],
    "start": 25,
    "limit": 25,
    "size": 1,
    "_links": {
      "base": base,
      "context": "",
      "self": format!("{base}/content/?start=25")
    }
  })
}

// Sample content item with one embedded attachment and a cursor to more
pub fn page_with_attachments_response() -> serde_json::Value {
  json!({
    "id": "456789",
    "type": "page",
    "status": "current",
    "title": "Architecture Diagram",
    "children": {
      "attachment": {
        "results": [
          {
            "id": "att1",
            "type": "attachment",
            "status": "current",
            "title": "architecture.png",
            "metadata": {
              "mediaType": "image/png"
            },
            "_links": {
              "download": "/download/attachments/456789/architecture.png"
            }
          }
        ],
        "start": 0,
        "limit": 1,
        "size": 1,
        "_links": {
          "next": "/rest/api/content/456789/child/attachment?limit=1&start=1"
        }
      }
    },
    "_links": {
      "self": "https://example.atlassian.net/wiki/rest/api/content/456789",
      "webui": "/spaces/ARCH/pages/456789/Architecture+Diagram"
    }
  })
}

// Sample response for the second attachment page
pub fn attachments_page_two_response() -> serde_json::Value {
  json!({
    "results": [
      {
        "id": "att2",
        "type": "attachment",
        "status": "current",
        "title": "deployment-diagram.pdf",
        "metadata": {
          "mediaType": "application/pdf"
        },
        "_links": {
          "download": "/download/attachments/456789/deployment-diagram.pdf"
        }
      }
    ],
    "start": 1,
    "limit": 1,
    "size": 1,
    "_links": {
      "next": "/rest/api/content/456789/child/attachment?limit=1&start=2"
    }
  })
}

// Sample response for the final attachment page, with no further cursor
pub fn attachments_page_final_response() -> serde_json::Value {
  json!({
    "results": [
      {
        "id": "att3",
        "type": "attachment",
        "status": "current",
        "title": "network-topology.svg",
        "metadata": {
          "mediaType": "image/svg+xml"
        },
        "_links": {
          "download": "/download/attachments/456789/network-topology.svg"
        }
      }
    ],
    "start": 2,
    "limit": 1,
    "size": 1,
    "_links": {}
  })
}

// Sample response for a CQL search with highlighted excerpts
pub fn search_results_response() -> serde_json::Value {
  json!({
    "results": [
      {
        "content": {
          "id": "123456",
          "type": "page",
          "status": "current",
          "title": "Getting Started Guide",
          "_links": {
            "self": "https://example.atlassian.net/wiki/rest/api/content/123456"
          }
        },
        "title": "@@@hl@@@Getting@@@endhl@@@ Started Guide",
        "excerpt": "Welcome to our @@@hl@@@documentation@@@endhl@@@!",
        "url": "/spaces/DOCS/pages/123456/Getting+Started+Guide",
        "resultGlobalContainer": {
          "title": "Documentation",
          "displayUrl": "/spaces/DOCS"
        },
        "breadcrumbs": [],
        "entityType": "content",
        "iconCssClass": "aui-icon content-type-page",
        "lastModified": "2024-03-15T10:30:00.000Z",
        "friendlyLastModified": "Mar 15, 2024"
      },
      {
        "content": {
          "id": "789012",
          "type": "page",
          "status": "current",
          "title": "API Documentation",
          "_links": {
            "self": "https://example.atlassian.net/wiki/rest/api/content/789012"
          }
        },
        "title": "API @@@hl@@@Documentation@@@endhl@@@",
        "excerpt": "This API provides access to our services.",
        "url": "/spaces/DEV/pages/789012/API+Documentation",
        "resultGlobalContainer": {
          "title": "Developer Portal",
          "displayUrl": "/spaces/DEV"
        },
        "breadcrumbs": [
          {
            "label": "Developer Portal",
            "url": "/spaces/DEV",
            "separator": "/"
          }
        ],
        "entityType": "content",
        "iconCssClass": "aui-icon content-type-page",
        "lastModified": "2024-06-01T08:15:30.000Z",
        "friendlyLastModified": "Jun 01, 2024"
      }
    ],
    "start": 0,
    "limit": 25,
    "size": 2,
    "totalSize": 2,
    "cqlQuery": "text ~ \"documentation\"",
    "searchDuration": 42,
    "_links": {
      "base": "https://example.atlassian.net/wiki",
      "context": "/wiki",
      "self": "https://example.atlassian.net/wiki/rest/api/search?cql=text+~+%22documentation%22"
    }
  })
}

// Sample response echoed back after creating a page
pub fn created_page_response() -> serde_json::Value {
  json!({
    "results": [
      {
        "id": "998877",
        "type": "page",
        "status": "current",
        "title": "Release Notes",
        "body": {
          "storage": {
            "value": "<p>Initial release.</p>",
            "representation": "storage"
          }
        },
        "_links": {
          "self": "https://example.atlassian.net/wiki/rest/api/content/998877",
          "webui": "/spaces/DOCS/pages/998877/Release+Notes"
        }
      }
    ],
    "start": 0,
    "limit": 1,
    "size": 1,
    "_links": {}
  })
}
