//! Request builder for the virtual-networking REST conventions.
use crate::{Error, Result};

const APPLICATION_JSON: &str = "application/json";

/// A request builder for a single resource collection.
///
/// Takes the collection's url path (base path segment included) and supplies
/// constructors for the REST verb shapes the service uses. All constructors
/// return [`http::Request`] objects with relative URIs; the client's base-uri
/// layer makes them absolute.
#[derive(Debug, Clone)]
pub struct Request {
    /// The path component of the collection url, e.g. `/20160918/vcns`.
    pub url_path: String,
}

impl Request {
    /// New request builder rooted at a collection's url path.
    pub fn new<S: Into<String>>(url_path: S) -> Self {
        Self {
            url_path: url_path.into(),
        }
    }
}

impl Request {
    /// Create an instance of the resource: `POST {collection}`.
    pub fn create(&self, data: Vec<u8>) -> Result<http::Request<Vec<u8>>> {
        http::Request::post(&self.url_path)
            .header(http::header::ACCEPT, APPLICATION_JSON)
            .header(http::header::CONTENT_TYPE, APPLICATION_JSON)
            .body(data)
            .map_err(Error::HttpError)
    }

    /// Get a single instance: `GET {collection}/{id}`.
    pub fn get(&self, id: &str) -> Result<http::Request<Vec<u8>>> {
        let target = format!("{}/{}", self.url_path, non_empty(id)?);
        http::Request::get(target)
            .header(http::header::ACCEPT, APPLICATION_JSON)
            .body(vec![])
            .map_err(Error::HttpError)
    }

    /// List the collection: `GET {collection}?{query}`.
    pub fn list(&self, params: &[(&str, String)]) -> Result<http::Request<Vec<u8>>> {
        let mut qp = form_urlencoded::Serializer::new(String::new());
        for (k, v) in params {
            qp.append_pair(k, v);
        }
        let query = qp.finish();
        let target = if query.is_empty() {
            self.url_path.clone()
        } else {
            format!("{}?{}", self.url_path, query)
        };
        http::Request::get(target)
            .header(http::header::ACCEPT, APPLICATION_JSON)
            .body(vec![])
            .map_err(Error::HttpError)
    }

    /// Update an instance: `PUT {collection}/{id}`.
    pub fn update(&self, id: &str, data: Vec<u8>) -> Result<http::Request<Vec<u8>>> {
        let target = format!("{}/{}", self.url_path, non_empty(id)?);
        http::Request::put(target)
            .header(http::header::ACCEPT, APPLICATION_JSON)
            .header(http::header::CONTENT_TYPE, APPLICATION_JSON)
            .body(data)
            .map_err(Error::HttpError)
    }

    /// Delete an instance: `DELETE {collection}/{id}`.
    pub fn delete(&self, id: &str) -> Result<http::Request<Vec<u8>>> {
        let target = format!("{}/{}", self.url_path, non_empty(id)?);
        http::Request::delete(target)
            .header(http::header::ACCEPT, APPLICATION_JSON)
            .body(vec![])
            .map_err(Error::HttpError)
    }

    /// Invoke a named action on an instance:
    /// `POST {collection}/{id}/actions/{verb}`.
    pub fn action(&self, id: &str, verb: &str, data: Vec<u8>) -> Result<http::Request<Vec<u8>>> {
        let target = format!("{}/{}/actions/{}", self.url_path, non_empty(id)?, verb);
        http::Request::post(target)
            .header(http::header::ACCEPT, APPLICATION_JSON)
            .header(http::header::CONTENT_TYPE, APPLICATION_JSON)
            .body(data)
            .map_err(Error::HttpError)
    }
}

fn non_empty(id: &str) -> Result<&str> {
    if id.is_empty() {
        return Err(Error::Validation("resource id must not be empty".into()));
    }
    Ok(id)
}

#[cfg(test)]
mod test {
    use super::Request;

    #[test]
    fn create_path() {
        let req = Request::new("/20160918/vcns").create(vec![]).unwrap();
        assert_eq!(req.uri(), "/20160918/vcns");
        assert_eq!(req.method(), "POST");
        assert_eq!(
            req.headers().get(http::header::CONTENT_TYPE).unwrap(),
            "application/json"
        );
    }

    #[test]
    fn get_path() {
        let req = Request::new("/20160918/vcns").get("ocid1.vcn.oc1..aaaa").unwrap();
        assert_eq!(req.uri(), "/20160918/vcns/ocid1.vcn.oc1..aaaa");
        assert_eq!(req.method(), "GET");
    }

    #[test]
    fn list_path_with_params() {
        let req = Request::new("/20160918/subnets")
            .list(&[
                ("compartmentId", "ocid1.compartment.oc1..bbbb".to_string()),
                ("vcnId", "ocid1.vcn.oc1..aaaa".to_string()),
                ("limit", "50".to_string()),
            ])
            .unwrap();
        assert_eq!(
            req.uri(),
            "/20160918/subnets?compartmentId=ocid1.compartment.oc1..bbbb&vcnId=ocid1.vcn.oc1..aaaa&limit=50"
        );
    }

    #[test]
    fn list_path_without_params() {
        let req = Request::new("/20160918/vcns").list(&[]).unwrap();
        assert_eq!(req.uri(), "/20160918/vcns");
    }

    #[test]
    fn update_path() {
        let req = Request::new("/20160918/routeTables")
            .update("ocid1.routetable.oc1..cccc", vec![])
            .unwrap();
        assert_eq!(req.uri(), "/20160918/routeTables/ocid1.routetable.oc1..cccc");
        assert_eq!(req.method(), "PUT");
    }

    #[test]
    fn delete_path() {
        let req = Request::new("/20160918/vcns").delete("ocid1.vcn.xxx").unwrap();
        assert_eq!(req.uri(), "/20160918/vcns/ocid1.vcn.xxx");
        assert_eq!(req.method(), "DELETE");
    }

    #[test]
    fn action_path() {
        let req = Request::new("/20160918/vcns")
            .action("ocid1.vcn.xxx", "changeCompartment", vec![])
            .unwrap();
        assert_eq!(req.uri(), "/20160918/vcns/ocid1.vcn.xxx/actions/changeCompartment");
        assert_eq!(req.method(), "POST");
    }

    #[test]
    fn empty_id_rejected() {
        let err = Request::new("/20160918/vcns").get("").unwrap_err();
        assert!(matches!(err, crate::Error::Validation(_)));
    }
}
